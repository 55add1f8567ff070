use anyhow::Result;
use bemkit::{Composer, Extra, FlagValue, Modifiers};
use clap::Args;

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Block name
    pub block: String,

    /// Element name
    #[arg(short, long)]
    pub element: Option<String>,

    /// Modifier name (repeatable)
    #[arg(short, long = "modifier", conflicts_with = "flags")]
    pub modifiers: Vec<String>,

    /// Modifier flag as KEY=BOOL (repeatable, order preserved)
    #[arg(long = "flag", value_parser = parse_flag)]
    pub flags: Vec<(String, bool)>,

    /// Extra class name (repeatable)
    #[arg(short = 'x', long = "extra")]
    pub extra: Vec<String>,
}

pub fn compose(args: ComposeArgs, composer: &Composer) -> Result<()> {
    println!("{}", compose_args(&args, composer));
    Ok(())
}

fn compose_args(args: &ComposeArgs, composer: &Composer) -> String {
    let modifiers = if !args.flags.is_empty() {
        Some(Modifiers::Flags(
            args.flags
                .iter()
                .map(|(key, value)| (key.clone(), FlagValue::Bool(*value)))
                .collect(),
        ))
    } else {
        match args.modifiers.as_slice() {
            [] => None,
            [single] => Some(Modifiers::Single(single.clone())),
            many => Some(Modifiers::List(many.to_vec())),
        }
    };

    let extra = match args.extra.as_slice() {
        [] => None,
        [single] => Some(Extra::Single(single.clone())),
        many => Some(Extra::List(many.to_vec())),
    };

    composer.compose(
        args.block.as_str(),
        args.element.as_deref(),
        modifiers.as_ref(),
        extra.as_ref(),
    )
}

fn parse_flag(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=BOOL, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("empty flag name in '{}'", raw));
    }

    let value = match value {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" | "" => false,
        other => return Err(format!("invalid flag value '{}' for '{}'", other, key)),
    };

    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(block: &str) -> ComposeArgs {
        ComposeArgs {
            block: block.to_string(),
            element: None,
            modifiers: vec![],
            flags: vec![],
            extra: vec![],
        }
    }

    #[test]
    fn test_compose_block_only() {
        assert_eq!(compose_args(&args("card"), &Composer::new()), "card");
    }

    #[test]
    fn test_compose_all_parts() {
        let mut a = args("card");
        a.element = Some("title".to_string());
        a.modifiers = vec!["fancy".to_string()];
        a.extra = vec!["inside-card".to_string()];
        assert_eq!(
            compose_args(&a, &Composer::new()),
            "card__title card__title--fancy inside-card"
        );
    }

    #[test]
    fn test_compose_flags() {
        let mut a = args("box");
        a.flags = vec![
            ("a".to_string(), true),
            ("b".to_string(), false),
            ("d".to_string(), true),
        ];
        assert_eq!(compose_args(&a, &Composer::new()), "box box--a box--d");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("active=true").unwrap(), ("active".to_string(), true));
        assert_eq!(parse_flag("hidden=off").unwrap(), ("hidden".to_string(), false));
        assert!(parse_flag("active").is_err());
        assert!(parse_flag("=true").is_err());
        assert!(parse_flag("active=maybe").is_err());
    }
}
