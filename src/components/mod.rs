//! UI Components
//!
//! Leptos components for the house listing and auth demo.

mod banner;
mod loading_indicator;
mod authenticator;
mod house_row;
mod house_list;
mod house_detail;
mod number_list;
mod component_picker;

pub use banner::Banner;
pub use loading_indicator::LoadingIndicator;
pub use authenticator::Authenticator;
pub use house_row::HouseRow;
pub use house_list::HouseList;
pub use house_detail::HouseDetail;
pub use number_list::NumberList;
pub use component_picker::ComponentPicker;
