pub mod countdown_service;
pub mod submission_service;

use std::sync::Arc;

use crate::domain::{EventCatalog, SiteProfile};
use crate::integrations::ContactGateway;
use countdown_service::CountdownService;
use submission_service::SubmissionService;

pub use countdown_service::{Clock, SystemClock, TickerHandle};
pub use submission_service::SubmissionOutcome;

pub struct ServiceContext {
    pub catalog: Arc<EventCatalog>,
    pub site: Arc<SiteProfile>,
    pub countdown: Arc<CountdownService>,
    pub submissions: Arc<SubmissionService>,
}

impl ServiceContext {
    pub fn new(
        catalog: EventCatalog,
        site: SiteProfile,
        countdown: CountdownService,
        gateway: Arc<dyn ContactGateway>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site: Arc::new(site),
            countdown: Arc::new(countdown),
            submissions: Arc::new(SubmissionService::new(gateway)),
        }
    }
}
