use core::ops::Add;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, Price, ProductId, Quantity};

/// Currency label used in every rendering.
pub const CURRENCY: &str = "RUB";

/// Unit label used in every rendering.
pub const UNIT: &str = "pcs";

/// Smartphone-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartphoneSpec {
    /// Performance/spec code (e.g. "A16").
    pub efficiency: String,
    pub model: String,
    /// Storage in GB.
    pub memory: u32,
    pub color: String,
}

/// Lawn-grass-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawnGrassSpec {
    pub country: String,
    pub germination_period: String,
    pub color: String,
}

/// Concrete product kind and its extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    Base,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    /// Stable, lowercase kind name.
    pub fn name(&self) -> &'static str {
        match self {
            ProductKind::Base => "product",
            ProductKind::Smartphone(_) => "smartphone",
            ProductKind::LawnGrass(_) => "lawn_grass",
        }
    }

    fn same_variant(&self, other: &ProductKind) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// A sellable item.
///
/// Price and quantity are validated at construction; afterwards price can only be
/// changed through [`Product::set_price`]. Products are entities: there is no value
/// equality, compare [`Product::id`] (or use [`Entity::same_entity`]) instead.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    quantity: Quantity,
    kind: ProductKind,
}

impl Product {
    /// Build a base product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Base)
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Smartphone(spec))
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::LawnGrass(spec))
    }

    /// Build a product of any kind. Quantity is checked before price.
    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        let quantity = Quantity::new(quantity)?;
        let price = Price::new(price)?;

        Ok(Self::from_parts(name, description, price, quantity, kind))
    }

    /// Assemble a product from already-validated values.
    pub fn from_parts(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        quantity: Quantity,
        kind: ProductKind,
    ) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            kind,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price.value()
    }

    /// Replace the price. On error the stored price is left untouched.
    pub fn set_price(&mut self, new_price: f64) -> DomainResult<()> {
        self.price = Price::new(new_price)?;
        Ok(())
    }

    pub fn quantity(&self) -> i64 {
        self.quantity.value()
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn as_smartphone(&self) -> Option<&SmartphoneSpec> {
        match &self.kind {
            ProductKind::Smartphone(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_lawn_grass(&self) -> Option<&LawnGrassSpec> {
        match &self.kind {
            ProductKind::LawnGrass(spec) => Some(spec),
            _ => None,
        }
    }

    /// `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price.times(self.quantity)
    }

    /// Price-weighted quantity of two products of the same kind.
    ///
    /// Different kinds (including base vs. smartphone) are a type mismatch.
    pub fn combined_value(&self, other: &Product) -> DomainResult<f64> {
        if !self.kind.same_variant(&other.kind) {
            return Err(DomainError::type_mismatch(format!(
                "cannot add {} to {}",
                other.kind_name(),
                self.kind_name()
            )));
        }
        Ok(self.stock_value() + other.stock_value())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Add for &Product {
    type Output = DomainResult<f64>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combined_value(rhs)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ProductKind::Base => write!(f, "{}, ", self.name)?,
            ProductKind::Smartphone(spec) => write!(
                f,
                "{} ({}), {}GB, {}, ",
                self.name, spec.model, spec.memory, spec.color
            )?,
            ProductKind::LawnGrass(spec) => write!(
                f,
                "{}, {}, {}, germination: {}, ",
                self.name, spec.country, spec.color, spec.germination_period
            )?,
        }
        write!(
            f,
            "{} {CURRENCY}. Remaining: {} {UNIT}.",
            self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(quantity: i64) -> Product {
        Product::smartphone(
            "iPhone 15",
            "512GB",
            200_000.0,
            quantity,
            SmartphoneSpec {
                efficiency: "A16".to_string(),
                model: "Pro".to_string(),
                memory: 512,
                color: "Gray".to_string(),
            },
        )
        .unwrap()
    }

    fn grass() -> Product {
        Product::lawn_grass(
            "GreenField",
            "Lawn grass",
            1500.0,
            20,
            LawnGrassSpec {
                country: "Netherlands".to_string(),
                germination_period: "2 weeks".to_string(),
                color: "Green".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_product_round_trips_through_getters() {
        let product = Product::new("Trinket", "Description", 100.0, 10).unwrap();
        assert_eq!(product.name(), "Trinket");
        assert_eq!(product.description(), "Description");
        assert_eq!(product.price(), 100.0);
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.kind(), &ProductKind::Base);
    }

    #[test]
    fn zero_or_negative_quantity_is_rejected() {
        let err = Product::new("Broken", "Bad quantity", 1000.0, 0).unwrap_err();
        assert!(err.is_validation());
        let err = Product::new("Broken", "Bad quantity", 1000.0, -5).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert!(Product::new("Free", "", 0.0, 1).unwrap_err().is_validation());
        assert!(Product::new("Neg", "", -1.0, 1).unwrap_err().is_validation());
    }

    #[test]
    fn set_price_validates_and_keeps_previous_value() {
        let mut product = Product::new("Trinket", "Description", 100.0, 10).unwrap();
        product.set_price(200.0).unwrap();
        assert_eq!(product.price(), 200.0);

        assert!(product.set_price(-50.0).unwrap_err().is_validation());
        assert!(product.set_price(0.0).unwrap_err().is_validation());
        assert_eq!(product.price(), 200.0);
    }

    #[test]
    fn set_price_accepts_extreme_positive_values() {
        let mut product = Product::new("Trinket", "Description", 1.0, 10).unwrap();
        for price in [1e10, 1e-10, 1e-15] {
            product.set_price(price).unwrap();
            assert_eq!(product.price(), price);
        }
    }

    #[test]
    fn identical_fields_are_still_distinct_products() {
        let a = Product::new("Same", "Same", 1.0, 1).unwrap();
        let b = Product::new("Same", "Same", 1.0, 1).unwrap();
        assert!(!a.same_entity(&b));
        assert!(a.same_entity(&a.clone()));
    }

    #[test]
    fn base_rendering() {
        let product = Product::new("Test item", "Description", 100.0, 10).unwrap();
        assert_eq!(product.to_string(), "Test item, 100.00 RUB. Remaining: 10 pcs.");
    }

    #[test]
    fn smartphone_rendering() {
        assert_eq!(
            phone(5).to_string(),
            "iPhone 15 (Pro), 512GB, Gray, 200000.00 RUB. Remaining: 5 pcs."
        );
    }

    #[test]
    fn lawn_grass_rendering() {
        assert_eq!(
            grass().to_string(),
            "GreenField, Netherlands, Green, germination: 2 weeks, 1500.00 RUB. Remaining: 20 pcs."
        );
    }

    #[test]
    fn addition_of_same_kind_is_weighted_sum() {
        let a = Product::new("Item 1", "", 100.0, 2).unwrap();
        let b = Product::new("Item 2", "", 200.0, 3).unwrap();
        assert_eq!((&a + &b).unwrap(), 100.0 * 2.0 + 200.0 * 3.0);

        assert_eq!((&phone(5) + &phone(3)).unwrap(), 200_000.0 * 5.0 + 200_000.0 * 3.0);
    }

    #[test]
    fn addition_of_different_kinds_is_type_mismatch() {
        let err = (&phone(5) + &grass()).unwrap_err();
        assert!(err.is_type_mismatch());

        let base = Product::new("Item", "", 100.0, 2).unwrap();
        assert!((&base + &phone(1)).unwrap_err().is_type_mismatch());
        assert!((&phone(1) + &base).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn kind_accessors_dispatch() {
        assert_eq!(phone(1).as_smartphone().unwrap().model, "Pro");
        assert!(phone(1).as_lawn_grass().is_none());
        assert_eq!(grass().as_lawn_grass().unwrap().country, "Netherlands");
        assert_eq!(grass().kind_name(), "lawn_grass");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: construction succeeds exactly when price > 0 and quantity >= 1.
            #[test]
            fn construction_matches_invariants(
                price in -1_000.0f64..1_000.0,
                quantity in -100i64..100
            ) {
                let result = Product::new("p", "d", price, quantity);
                prop_assert_eq!(result.is_ok(), price > 0.0 && quantity >= 1);
            }

            /// Property: a rejected price write never changes the stored price.
            #[test]
            fn rejected_price_write_is_a_no_op(
                initial in 0.01f64..1_000_000.0,
                bad in -1_000_000.0f64..=0.0
            ) {
                let mut product = Product::new("p", "d", initial, 1).unwrap();
                prop_assert!(product.set_price(bad).is_err());
                prop_assert_eq!(product.price(), initial);
            }

            /// Property: same-kind addition is price1*qty1 + price2*qty2.
            #[test]
            fn addition_is_weighted_sum(
                p1 in 0.01f64..100_000.0,
                q1 in 1i64..1_000,
                p2 in 0.01f64..100_000.0,
                q2 in 1i64..1_000
            ) {
                let a = Product::new("a", "", p1, q1).unwrap();
                let b = Product::new("b", "", p2, q2).unwrap();
                prop_assert_eq!((&a + &b).unwrap(), p1 * q1 as f64 + p2 * q2 as f64);
            }
        }
    }
}
