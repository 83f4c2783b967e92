//! A thousand keyed records presented through a virtualized list, each row
//! showing its title and a memoized derived value.

pub mod app;
