mod airport;
mod search;
mod trip;
