
mod detailed;
