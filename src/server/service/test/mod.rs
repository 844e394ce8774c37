mod airline;
mod airport;
