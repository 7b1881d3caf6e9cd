//! launchdeck-app - Application state and orchestration for launchdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the search, pagination and result controllers, the detail
//! resolver, the view model the front ends draw from, configuration loading,
//! and the Engine that ties them to a [`launchdeck_gateway::FetchGateway`].

pub mod actions;
pub mod config;
pub mod detail;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod launches;
pub mod message;
pub mod pagination;
pub mod presenter;
pub mod process;
pub mod request;
pub mod search;
pub mod signals;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use detail::{DetailResolver, DetailState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use launches::{LaunchListController, LaunchesRequest};
pub use message::Message;
pub use pagination::PaginationController;
pub use presenter::{ResultPresenter, ResultState};
pub use request::RequestId;
pub use search::SearchController;
pub use state::{AppPhase, AppState, Focus};
