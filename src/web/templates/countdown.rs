use askama::Template;

use crate::domain::SiteProfile;
use super::LaunchView;

/// Time blocks pushed to the page on every tick.
#[derive(Template)]
#[template(path = "partials/countdown.html")]
pub struct CountdownTemplate {
    pub launch: LaunchView,
}

/// Replaces the whole launch section once the countdown reaches zero.
#[derive(Template)]
#[template(path = "partials/live.html")]
pub struct LiveTemplate<'a> {
    pub site: &'a SiteProfile,
}
