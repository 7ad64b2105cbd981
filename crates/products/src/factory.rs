//! Product construction from untyped field bags.
//!
//! Variant dispatch is a single ordered table of [`KindRule`]s: the first rule whose
//! discriminator field is present in the bag wins, and a bag matching no rule becomes a
//! base product. Adding a product kind means adding a rule; call sites don't change.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use storefront_core::{DomainError, DomainResult, Price, Quantity};
use storefront_events::{Observer, ObserverSet};

use crate::event::{ProductCreated, ProductEvent};
use crate::product::{LawnGrassSpec, Product, ProductKind, SmartphoneSpec};

/// One product record before variant dispatch.
pub type FieldBag = Map<String, Value>;

/// Turns a field bag into a product; must consume the bag exhaustively.
pub type BuildFn = fn(FieldBag) -> DomainResult<Product>;

/// Kind name used when no rule matches.
pub const BASE_KIND: &str = "product";

/// `discriminator` present in the bag → build with `build`.
///
/// `kind` labels the rule in [`ProductFactory::kind_for`] and in the
/// `ProductCreated` event. It can be finer than the built product's
/// [`Product::kind_name`], which only knows the stored variants: a custom rule that
/// builds a base product still reports its own `kind` in the event.
#[derive(Debug, Clone, Copy)]
pub struct KindRule {
    pub discriminator: &'static str,
    pub kind: &'static str,
    pub build: BuildFn,
}

/// Built-in rules, highest priority first.
pub const BUILTIN_RULES: [KindRule; 2] = [
    KindRule {
        discriminator: "efficiency",
        kind: "smartphone",
        build: build_smartphone,
    },
    KindRule {
        discriminator: "country",
        kind: "lawn_grass",
        build: build_lawn_grass,
    },
];

/// Chooses and runs the most specific builder for a field bag.
#[derive(Debug)]
pub struct ProductFactory {
    rules: Vec<KindRule>,
    observers: ObserverSet<ProductEvent>,
}

impl ProductFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. It is checked after every rule already registered.
    pub fn with_rule(mut self, discriminator: &'static str, kind: &'static str, build: BuildFn) -> Self {
        self.rules.push(KindRule {
            discriminator,
            kind,
            build,
        });
        self
    }

    /// Register an observer notified after each successful build.
    pub fn with_observer(mut self, observer: impl Observer<ProductEvent> + 'static) -> Self {
        self.observers.register(observer);
        self
    }

    pub fn rules(&self) -> &[KindRule] {
        &self.rules
    }

    fn select(&self, bag: &FieldBag) -> Option<&KindRule> {
        self.rules
            .iter()
            .find(|rule| bag.contains_key(rule.discriminator))
    }

    /// Kind the bag would be built as.
    pub fn kind_for(&self, bag: &FieldBag) -> &'static str {
        self.select(bag).map_or(BASE_KIND, |rule| rule.kind)
    }

    pub fn build(&self, bag: FieldBag) -> DomainResult<Product> {
        let (kind, build) = self
            .select(&bag)
            .map_or((BASE_KIND, build_base as BuildFn), |rule| (rule.kind, rule.build));
        let product = build(bag)?;

        self.observers.notify(&ProductEvent::ProductCreated(ProductCreated::new(
            &product, kind,
        )));

        Ok(product)
    }

    /// Like [`ProductFactory::build`], for a raw JSON value.
    ///
    /// Anything but a JSON object is a type mismatch.
    pub fn build_value(&self, value: &Value) -> DomainResult<Product> {
        match value {
            Value::Object(bag) => self.build(bag.clone()),
            other => Err(DomainError::type_mismatch(format!(
                "product record must be a JSON object, got {}",
                json_type(other)
            ))),
        }
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.to_vec(),
            observers: ObserverSet::new(),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BaseRecord {
    name: String,
    description: String,
    price: Price,
    quantity: Quantity,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SmartphoneRecord {
    name: String,
    description: String,
    price: Price,
    quantity: Quantity,
    #[serde(deserialize_with = "spec_code")]
    efficiency: String,
    model: String,
    memory: u32,
    color: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LawnGrassRecord {
    name: String,
    description: String,
    price: Price,
    quantity: Quantity,
    country: String,
    germination_period: String,
    color: String,
}

// Efficiency shows up both as "A16" and as 95.5 in catalog files.
fn spec_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    })
}

fn decode<T: DeserializeOwned>(kind: &str, bag: FieldBag) -> DomainResult<T> {
    serde_json::from_value(Value::Object(bag))
        .map_err(|e| DomainError::validation(format!("{kind} record: {e}")))
}

pub fn build_base(bag: FieldBag) -> DomainResult<Product> {
    let r: BaseRecord = decode(BASE_KIND, bag)?;
    Ok(Product::from_parts(r.name, r.description, r.price, r.quantity, ProductKind::Base))
}

pub fn build_smartphone(bag: FieldBag) -> DomainResult<Product> {
    let r: SmartphoneRecord = decode("smartphone", bag)?;
    Ok(Product::from_parts(
        r.name,
        r.description,
        r.price,
        r.quantity,
        ProductKind::Smartphone(SmartphoneSpec {
            efficiency: r.efficiency,
            model: r.model,
            memory: r.memory,
            color: r.color,
        }),
    ))
}

pub fn build_lawn_grass(bag: FieldBag) -> DomainResult<Product> {
    let r: LawnGrassRecord = decode("lawn_grass", bag)?;
    Ok(Product::from_parts(
        r.name,
        r.description,
        r.price,
        r.quantity,
        ProductKind::LawnGrass(LawnGrassSpec {
            country: r.country,
            germination_period: r.germination_period,
            color: r.color,
        }),
    ))
}
