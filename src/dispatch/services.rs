use crate::config::Config;

/// Looks up live service handlers by name.
pub trait ServiceDirectory {
	/// The canonical name of the service called `name`, if one is running.
	fn resolve(&self, name: &str) -> Option<String>;
}

/// A fixed list of services, matched ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct StaticServices {
	names: Vec<String>,
}

impl StaticServices {
	pub fn new<I, N>(names: I) -> Self
	where
		I: IntoIterator<Item = N>,
		N: Into<String>,
	{
		let mut services = Self::default();
		for name in names {
			services.add(name);
		}
		services
	}

	/// Every service named by a rewrite rule in `config`.
	pub fn from_config(config: &Config) -> Self {
		Self::new(config.rule_specs().iter().map(|rule| rule.scope().to_string()))
	}

	/// Register `name`. Names already present (ignoring case) are kept as is.
	pub fn add(&mut self, name: impl Into<String>) {
		let name = name.into();
		if name.is_empty() || self.resolve(&name).is_some() {
			return;
		}
		self.names.push(name);
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}
}

impl ServiceDirectory for StaticServices {
	fn resolve(&self, name: &str) -> Option<String> {
		self.names
			.iter()
			.find(|known| known.eq_ignore_ascii_case(name))
			.cloned()
	}
}
