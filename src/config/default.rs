// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# guardian configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Rules are applied in order; the first rejection stops the check.
# Available rules (case-insensitive):
#   noCyrillic, noLatin, noDigits
#   cyrillicOnly, latinOnly, digitsOnly
#   allowLatin, allowCyrillic, allowDigits
#   allowScope
[rules]
type = ["latinOnly"]
scope = ["latinOnly", "digitsOnly"]
description = ["noCyrillic"]
require_blank_line = false

# Extra arguments for `guardian check` in the commit-msg hook
[hooks]
args = []

[ui]
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardianConfig;

    #[test]
    fn test_example_config_matches_defaults() {
        let config: GuardianConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config, GuardianConfig::default());
    }
}
