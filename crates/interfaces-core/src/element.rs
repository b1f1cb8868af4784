//! Cell payloads
//!
//! An [`Element`] is the immutable value held by one pane cell. Its rendered
//! payload is an [`ItemStack`] descriptor, which is what the host container
//! receives per slot.

use serde::{Deserialize, Serialize};

/// Material name used for empty cells
pub const AIR: &str = "air";

fn default_amount() -> u8 {
    1
}

/// An item-like descriptor rendered into one container slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemStack {
    /// Material identifier (e.g., "stone", "black_stained_glass_pane")
    pub material: String,

    /// Stack size
    #[serde(default = "default_amount")]
    pub amount: u8,

    /// Custom display name
    #[serde(default)]
    pub name: Option<String>,

    /// Lore lines shown under the name
    #[serde(default)]
    pub lore: Vec<String>,
}

impl ItemStack {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            amount: 1,
            name: None,
            lore: Vec::new(),
        }
    }

    /// The empty stack
    pub fn air() -> Self {
        Self::new(AIR)
    }

    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_lore<I, S>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lore.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_air(&self) -> bool {
        self.material == AIR || self.amount == 0
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::air()
    }
}

/// One cell of a pane
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element {
    item: ItemStack,
}

impl Element {
    pub fn new(item: ItemStack) -> Self {
        Self { item }
    }

    /// The explicit empty element
    pub fn empty() -> Self {
        Self::new(ItemStack::air())
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_air()
    }

    /// The payload written into the host container slot
    pub fn rendered_payload(&self) -> &ItemStack {
        &self.item
    }
}

impl From<ItemStack> for Element {
    fn from(item: ItemStack) -> Self {
        Self::new(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_renders_air() {
        let element = Element::empty();
        assert!(element.is_empty());
        assert_eq!(element.rendered_payload(), &ItemStack::air());
        assert_eq!(Element::default(), element);
    }

    #[test]
    fn test_zero_amount_is_air() {
        assert!(ItemStack::new("diamond").with_amount(0).is_air());
        assert!(!ItemStack::new("diamond").is_air());
    }

    #[test]
    fn test_item_builder() {
        let item = ItemStack::new("emerald")
            .with_amount(16)
            .with_name("Coins")
            .with_lore(["Spend wisely"]);

        assert_eq!(item.material, "emerald");
        assert_eq!(item.amount, 16);
        assert_eq!(item.name.as_deref(), Some("Coins"));
        assert_eq!(item.lore, vec!["Spend wisely".to_string()]);
    }

    #[test]
    fn test_element_deserializes_from_item_table() {
        let element: Element = toml::from_str("material = \"stone\"\nname = \"Rock\"\n")
            .expect("element should parse");
        assert_eq!(element.rendered_payload().material, "stone");
        assert_eq!(element.rendered_payload().amount, 1);
        assert_eq!(element.rendered_payload().name.as_deref(), Some("Rock"));
    }
}
