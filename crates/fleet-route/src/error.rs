use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route \"{name}\" has {waypoints} waypoint(s); at least 2 are required")]
    Unroutable { name: String, waypoints: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
