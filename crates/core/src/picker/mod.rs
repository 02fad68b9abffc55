//! Picker module - choosing the next achievement to chase.

mod picker_model;
mod picker_service;
mod picker_traits;

#[cfg(test)]
mod picker_service_tests;

pub use picker_model::{
    filter_games, BrowseOptions, BrowseOutcome, NotFound, NotFoundReason, PickOptions,
    PickOutcome,
};
pub use picker_service::PickerService;
pub use picker_traits::PickerServiceTrait;
