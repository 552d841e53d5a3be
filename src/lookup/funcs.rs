//! Built-in generator registrations.

use super::{Info, LookupError, MapParams, Param, Registry};
use crate::pass::{self, PassConfig, PassType};
use crate::rng::RandomSource;
use crate::username;
use crate::weighted;

pub(super) fn add_auth(registry: &mut Registry) {
    registry.add(
        "username",
        Info {
            display: "Username",
            category: "auth",
            description: "Unique identifier assigned to a user for accessing an account or system",
            example: "Treutel8125",
            output: "string",
            params: Vec::new(),
            generate: gen_username,
        },
    );

    registry.add(
        "password",
        Info {
            display: "Password",
            category: "auth",
            description: "Secret word or phrase used to authenticate access to a system or account",
            example: "-DTHJ@.oF@d@L5F65 N-.@U5xWX F0DI",
            output: "string",
            params: vec![
                bool_param("lower", "Lower", "true", "Whether or not to add lower case characters"),
                bool_param("upper", "Upper", "true", "Whether or not to add upper case characters"),
                bool_param("numeric", "Numeric", "true", "Whether or not to add numeric characters"),
                bool_param("special", "Special", "true", "Whether or not to add special characters"),
                bool_param("space", "Space", "false", "Whether or not to add spaces"),
                Param {
                    field: "length",
                    display: "Length",
                    kind: "int",
                    default: "12",
                    description: "Number of characters in password",
                },
                Param {
                    field: "type",
                    display: "Type",
                    kind: "string",
                    default: "simple",
                    description: "Generation strategy",
                },
            ],
            generate: gen_password,
        },
    );
}

pub(super) fn add_weighted(registry: &mut Registry) {
    registry.add(
        "weighted",
        Info {
            display: "Weighted",
            category: "misc",
            description: "Randomly select an option, each with its own chance of being picked",
            example: "hello",
            output: "string",
            params: vec![
                Param {
                    field: "options",
                    display: "Options",
                    kind: "[]string",
                    default: "",
                    description: "Array of any values",
                },
                Param {
                    field: "weights",
                    display: "Weights",
                    kind: "[]float",
                    default: "",
                    description: "Array of weights, one per option",
                },
            ],
            generate: gen_weighted,
        },
    );
}

fn bool_param(
    field: &'static str,
    display: &'static str,
    default: &'static str,
    description: &'static str,
) -> Param {
    Param {
        field,
        display,
        kind: "bool",
        default,
        description,
    }
}

fn gen_username(
    rng: &mut dyn RandomSource,
    _: &MapParams,
    _: &Info,
) -> Result<String, LookupError> {
    Ok(username::username(rng))
}

/// Build a [`PassConfig`] from untyped parameters.
pub fn pass_config(m: &MapParams, info: &Info) -> Result<PassConfig, LookupError> {
    let length = info.get_int(m, "length")?;
    let length = usize::try_from(length).map_err(|_| LookupError::InvalidParam {
        field: "length".to_string(),
        value: length.to_string(),
        expected: "non-negative int",
    })?;
    let kind: PassType = info.get_string(m, "type")?.parse()?;

    Ok(PassConfig {
        kind,
        length,
        lower: info.get_bool(m, "lower")?,
        upper: info.get_bool(m, "upper")?,
        numeric: info.get_bool(m, "numeric")?,
        special: info.get_bool(m, "special")?,
        space: info.get_bool(m, "space")?,
    })
}

fn gen_password(
    rng: &mut dyn RandomSource,
    m: &MapParams,
    info: &Info,
) -> Result<String, LookupError> {
    let config = pass_config(m, info)?;
    Ok(pass::generate(rng, &config))
}

fn gen_weighted(
    rng: &mut dyn RandomSource,
    m: &MapParams,
    info: &Info,
) -> Result<String, LookupError> {
    let options = info.get_string_array(m, "options")?;
    let weights = info.get_float_array(m, "weights")?;
    let picked = weighted::weighted(rng, &options, &weights)?;
    Ok(picked.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ParsePassTypeError;
    use crate::rng;
    use crate::weighted::WeightedError;

    fn password_info() -> Info {
        Registry::builtin().get("password").cloned().unwrap()
    }

    #[test]
    fn defaults_match_pass_config_default() {
        let config = pass_config(&MapParams::new(), &password_info()).unwrap();
        assert_eq!(config, PassConfig::default());
    }

    #[test]
    fn explicit_params_override_defaults() {
        let mut m = MapParams::new();
        m.set("length", "20");
        m.set("special", "false");
        m.set("space", "true");
        let config = pass_config(&m, &password_info()).unwrap();
        assert_eq!(config.length, 20);
        assert!(!config.special);
        assert!(config.space);
        assert!(config.lower);
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut m = MapParams::new();
        m.set("length", "-3");
        assert_eq!(
            pass_config(&m, &password_info()),
            Err(LookupError::InvalidParam {
                field: "length".into(),
                value: "-3".into(),
                expected: "non-negative int",
            })
        );
    }

    #[test]
    fn unsupported_type_is_rejected() {
        let mut m = MapParams::new();
        m.set("type", "words");
        assert_eq!(
            pass_config(&m, &password_info()),
            Err(LookupError::PassType(ParsePassTypeError::Unsupported(
                "words".into()
            )))
        );
    }

    #[test]
    fn password_through_registry_matches_core() {
        let registry = Registry::builtin();
        let mut m = MapParams::new();
        m.set("length", "32");

        let mut a = rng::seeded(11);
        let mut b = rng::seeded(11);
        let via_registry = registry.generate("password", &mut a, &m).unwrap();
        let config = PassConfig {
            length: 32,
            ..PassConfig::default()
        };
        assert_eq!(via_registry, pass::generate(&mut b, &config));
    }

    #[test]
    fn weighted_requires_options() {
        let registry = Registry::builtin();
        let mut rng = rng::seeded(1);
        assert_eq!(
            registry.generate("weighted", &mut rng, &MapParams::new()),
            Err(LookupError::MissingParam("options".into()))
        );

        let mut m = MapParams::new();
        m.parse_pair("options=a,b").unwrap();
        m.parse_pair("weights=1").unwrap();
        assert_eq!(
            registry.generate("weighted", &mut rng, &m),
            Err(LookupError::Weighted(WeightedError::LengthMismatch {
                options: 2,
                weights: 1
            }))
        );
    }

    #[test]
    fn weighted_picks_an_option() {
        let registry = Registry::builtin();
        let mut rng = rng::seeded(1);
        let mut m = MapParams::new();
        m.parse_pair("options=hello,2,6.9").unwrap();
        m.parse_pair("weights=1,2,3").unwrap();
        for _ in 0..50 {
            let picked = registry.generate("weighted", &mut rng, &m).unwrap();
            assert!(["hello", "2", "6.9"].contains(&picked.as_str()));
        }
    }

    #[test]
    fn username_through_registry() {
        let registry = Registry::builtin();
        let mut rng = rng::seeded(3);
        let name = registry.generate("username", &mut rng, &MapParams::new()).unwrap();
        assert!(name.len() > 4);
    }
}
