/// Application name, used for the registry user agent
pub const APP_NAME: &str = "atomic";

/// Name of the project configuration file written to the project root
pub const CONFIG_FILE_NAME: &str = "getatomic.components.json";

/// Name of the package manifest every target project must have
pub const PACKAGE_JSON: &str = "package.json";

/// Default base URL of the component registry
pub const DEFAULT_REGISTRY_URL: &str = "https://getatomic.dev/api";

/// Environment variable overriding [`DEFAULT_REGISTRY_URL`]
pub const REGISTRY_URL_ENV: &str = "ATOMIC_REGISTRY_URL";

/// Default stylesheet location offered during `init`
pub const DEFAULT_CSS_PATH: &str = "src/styles/globals.css";

/// Default import alias for generated components offered during `init`
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";

/// UI framework packages, one of which must be declared in the manifest
pub const SUPPORTED_FRAMEWORKS: &[&str] = &["next", "react", "@remix-run/react", "gatsby"];
