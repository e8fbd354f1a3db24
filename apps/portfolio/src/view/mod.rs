// Server-side page rendering: document tree, page skeleton, content population.

pub mod dom;
pub mod page;
pub mod populate;
