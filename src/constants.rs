//! Common constants used throughout codefs.

/// Placeholder replaced by the generated map entries
pub const DATA_MARKER: &str = "//###DATA###";

/// Build tag line that keeps the raw template out of normal builds
pub const BUILD_TAG_EXCLUDED: &str = "// +build !makebuild";

/// Build tag line written into the generated file
pub const BUILD_TAG_INCLUDED: &str = "// +build makebuild";

/// Placeholder replaced by the generation timestamp
pub const GENDATE_MARKER: &str = "###GENDATE###";

/// Placeholder replaced by the command line that produced the file
pub const GENCMD_MARKER: &str = "###GENCMD###";

/// Markers checked by strict template validation, in substitution order
pub const TEMPLATE_MARKERS: [&str; 4] =
    [BUILD_TAG_EXCLUDED, DATA_MARKER, GENDATE_MARKER, GENCMD_MARKER];

/// Server path that also gets registered under [`ROOT_KEY`] by default
pub const DEFAULT_INDEX: &str = "/index.html";

/// Default template file name
pub const DEFAULT_TEMPLATE: &str = "template.go";

/// Key the index content is duplicated under
pub const ROOT_KEY: &str = "/";

/// `ctime`-style timestamp format, e.g. `Thu Oct 15 09:03:07 2026`
pub const GENDATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";
