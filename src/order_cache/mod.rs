//! Local cache of the backend's order list.

pub mod entity;

use crate::framework::{CacheActor, CacheClient};
use crate::model::Order;

/// Request channel capacity for the order cache.
pub const ORDER_CACHE_BUFFER: usize = 32;

/// Creates a new, empty order cache actor and its client.
pub fn new() -> (CacheActor<Order>, CacheClient<Order>) {
    CacheActor::new(ORDER_CACHE_BUFFER)
}
