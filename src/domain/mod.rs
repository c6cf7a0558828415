pub mod countdown;
pub mod event;
pub mod form;
pub mod selection;
pub mod site;

pub use countdown::{Breakdown, Countdown, CountdownState, TimeBlock};
pub use event::{default_events, Event, EventCatalog, Media};
pub use form::{Day, FormField, FormState, FormVariant};
pub use selection::{PageState, Selection, SelectionQuery};
pub use site::SiteProfile;
