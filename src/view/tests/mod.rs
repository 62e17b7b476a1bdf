mod optimistic;
mod pagination;
mod query;
mod seats;
