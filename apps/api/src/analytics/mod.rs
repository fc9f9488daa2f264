// Read-side analytics: stored engagement averages, LLM trend detection and
// optimal posting time. Nothing here writes to the database.

pub mod handlers;
pub mod reader;
pub mod timing;
pub mod trends;
