// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;
use web_sys::window;

/// Settings fixed for the lifetime of the application, read once at startup
#[derive(Clone, Debug)]
pub struct ClientConfig {
	pub api_base: String,
	pub log_level: Level,
}

impl ClientConfig {
	/// Builds the configuration from the build environment, falling back to the origin of the page the client was
	/// served from for the API base.
	pub fn load() -> Self {
		let api_base = match option_env!("PORTAL_API_BASE") {
			Some(base) if !base.is_empty() => base.to_string(),
			_ => page_origin().unwrap_or_default(),
		};
		let log_level = parse_log_level(option_env!("PORTAL_LOG_LEVEL")).unwrap_or(DEFAULT_LOG_LEVEL);
		Self { api_base, log_level }
	}

	pub fn endpoint(&self, route: &str) -> String {
		endpoint_url(&self.api_base, route)
	}
}

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: Level = Level::Info;

fn page_origin() -> Option<String> {
	window()?.location().origin().ok()
}

fn parse_log_level(value: Option<&str>) -> Option<Level> {
	value?.trim().parse().ok()
}

/// Joins an API base and a route so that exactly one slash separates them. An empty base yields a path relative to
/// the current origin.
pub fn endpoint_url(base: &str, route: &str) -> String {
	let base = base.trim_end_matches('/');
	let route = route.trim_start_matches('/');
	format!("{}/{}", base, route)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_slashes() {
		assert_eq!(endpoint_url("https://example.com", "/api/auth/signup"), "https://example.com/api/auth/signup");
		assert_eq!(endpoint_url("https://example.com/", "/api/auth/signup"), "https://example.com/api/auth/signup");
		assert_eq!(endpoint_url("https://example.com/v1", "api/auth/signup"), "https://example.com/v1/api/auth/signup");
		assert_eq!(endpoint_url("", "/api/auth/signup"), "/api/auth/signup");
	}

	#[test]
	fn log_levels() {
		assert_eq!(parse_log_level(Some("warn")), Some(Level::Warn));
		assert_eq!(parse_log_level(Some(" TRACE ")), Some(Level::Trace));
		assert_eq!(parse_log_level(Some("loud")), None);
		assert_eq!(parse_log_level(None), None);
	}
}
