use crate::block::BlockRef;
use crate::error::{BemError, BemResult};
use crate::extra::Extra;
use crate::modifiers::Modifiers;
use crate::request::ClassRequest;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const ELEMENT_SEPARATOR: &str = "__";
pub const MODIFIER_SEPARATOR: &str = "--";

/// Separator tokens placed between block, element and modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Separators {
    #[serde(default = "default_element_separator")]
    pub element: String,

    #[serde(default = "default_modifier_separator")]
    pub modifier: String,
}

fn default_element_separator() -> String {
    ELEMENT_SEPARATOR.to_string()
}

fn default_modifier_separator() -> String {
    MODIFIER_SEPARATOR.to_string()
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            element: default_element_separator(),
            modifier: default_modifier_separator(),
        }
    }
}

impl Separators {
    pub fn validate(&self) -> BemResult<()> {
        if self.element.is_empty() {
            return Err(BemError::InvalidSeparators(
                "element separator is empty".to_string(),
            ));
        }
        if self.modifier.is_empty() {
            return Err(BemError::InvalidSeparators(
                "modifier separator is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds BEM class strings.
///
/// Output order is always: base class, modifier classes, extra classes.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    separators: Separators,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with custom separator tokens. Empty tokens are rejected.
    pub fn with_separators(separators: Separators) -> BemResult<Self> {
        separators.validate()?;
        Ok(Self { separators })
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// `block` or `block__element`. An empty element counts as absent.
    pub fn base(&self, block: &BlockRef, element: Option<&str>) -> String {
        match element {
            Some(element) if !element.is_empty() => {
                format!("{}{}{}", block.name(), self.separators.element, element)
            }
            _ => block.name().to_string(),
        }
    }

    pub fn compose(
        &self,
        block: impl Into<BlockRef>,
        element: Option<&str>,
        modifiers: Option<&Modifiers>,
        extra: Option<&Extra>,
    ) -> String {
        let block = block.into();
        let base = self.base(&block, element);

        let mods = modifiers.map(Modifiers::normalize).unwrap_or_default();
        let extras = extra.map(Extra::normalize).unwrap_or_default();

        trace!(
            base = %base,
            modifiers = mods.len(),
            extras = extras.len(),
            "composing class names"
        );

        let modifier_classes: Vec<String> = mods
            .iter()
            .map(|modifier| format!("{}{}{}", base, self.separators.modifier, modifier))
            .collect();

        std::iter::once(base)
            .chain(modifier_classes)
            .chain(extras.into_iter().map(str::to_string))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn compose_request(&self, request: &ClassRequest) -> String {
        self.compose(
            &request.block,
            request.element.as_deref(),
            request.modifiers.as_ref(),
            request.extra.as_ref(),
        )
    }
}

/// Build a BEM class string with the standard `__` and `--` separators.
///
/// ```
/// use bemkit::{bem, Modifiers};
///
/// assert_eq!(
///     bem("heading", None, Some(&Modifiers::from("subheading")), None),
///     "heading heading--subheading"
/// );
/// ```
pub fn bem(
    block: impl Into<BlockRef>,
    element: Option<&str>,
    modifiers: Option<&Modifiers>,
    extra: Option<&Extra>,
) -> String {
    Composer::default().compose(block, element, modifiers, extra)
}
