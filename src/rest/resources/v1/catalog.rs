//! Catalog resources: blueprints, print providers, variants and shipping.
//!
//! The catalog is read-only and not shop specific. A blueprint is a base
//! product (a t-shirt model, a mug); print providers manufacture blueprints,
//! and each blueprint/provider pair has its own variants and shipping
//! profiles.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{Blueprint, PrintProvider};
//!
//! let blueprints = Blueprint::all(&client).await?;
//! let providers = Blueprint::print_providers(&client, blueprints[0].id).await?;
//! let variants = Blueprint::variants(&client, blueprints[0].id, providers[0].id).await?;
//! let shipping = Blueprint::shipping(&client, blueprints[0].id, providers[0].id).await?;
//!
//! let provider = PrintProvider::find(&client, providers[0].id).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::v1::common::flexible_amount;
use crate::rest::{Direct, NoBody, Operation, PathArg};

/// A base product offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Blueprint {
    /// The blueprint id.
    pub id: u64,

    /// The blueprint name.
    #[serde(default)]
    pub title: String,

    /// HTML description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The brand name.
    #[serde(default)]
    pub brand: String,

    /// The brand's model name.
    #[serde(default)]
    pub model: String,

    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

/// A print provider that manufactures blueprints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrintProvider {
    /// The print provider id.
    pub id: u64,

    /// The print provider name.
    #[serde(default)]
    pub title: String,

    /// Where the provider is located. Only present on single-provider lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Blueprints offered by the provider. Only present on single-provider
    /// lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprints: Option<Vec<Blueprint>>,
}

/// A print provider's location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    /// First address line.
    #[serde(default)]
    pub address1: String,
    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Two-letter ISO country code.
    #[serde(default)]
    pub country: String,
    /// State or region code.
    #[serde(default)]
    pub region: String,
    /// Postal code.
    #[serde(default)]
    pub zip: String,
}

/// The variants a print provider offers for a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BlueprintVariants {
    /// The print provider id.
    pub id: u64,

    /// The print provider name.
    #[serde(default)]
    pub title: String,

    /// The available variants.
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

/// A catalog variant of a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogVariant {
    /// The variant id, used when creating products.
    pub id: u64,

    /// The variant name, e.g. `Heather Grey / S`.
    #[serde(default)]
    pub title: String,

    /// The variant's option values.
    #[serde(default)]
    pub options: VariantOptions,

    /// Printable areas of the variant.
    #[serde(default)]
    pub placeholders: Vec<CatalogPlaceholder>,
}

/// Option values of a catalog variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantOptions {
    /// Color name, e.g. `Heather Grey`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size label, e.g. `XS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// A printable area of a catalog variant, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogPlaceholder {
    /// The position name, e.g. `front` or `back`.
    pub position: String,
    /// Print area height in pixels.
    pub height: f64,
    /// Print area width in pixels.
    pub width: f64,
}

/// Shipping information for a blueprint/provider pair.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shipping {
    /// Time until the order is handed to the carrier.
    pub handling_time: HandlingTime,

    /// Shipping profiles by variant and country.
    #[serde(default)]
    pub profiles: Vec<ShippingProfile>,
}

/// A handling duration, e.g. 10 `day`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HandlingTime {
    /// Number of `unit`s before the item ships.
    pub value: u32,
    /// Time unit, e.g. `day`.
    pub unit: String,
}

/// Shipping costs for a set of variants and countries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingProfile {
    /// Variant ids the profile applies to.
    #[serde(default)]
    pub variant_ids: Vec<u64>,

    /// Cost of the first item.
    pub first_item: ShippingCost,

    /// Cost of each additional item.
    pub additional_items: ShippingCost,

    /// Country codes, or `REST_OF_THE_WORLD`.
    #[serde(default)]
    pub countries: Vec<String>,
}

/// A shipping cost in the smallest currency unit.
///
/// The API sends the amount as a number or as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingCost {
    /// ISO currency code, e.g. `USD`.
    pub currency: String,
    /// Cost in cents.
    #[serde(with = "flexible_amount")]
    pub cost: u64,
}

/// `GET /v1/catalog/blueprints.json`
pub const LIST_BLUEPRINTS: Operation<(), NoBody, Direct<Vec<Blueprint>>> =
    Operation::new(HttpMethod::Get, "/v1/catalog/blueprints.json");

/// `GET /v1/catalog/blueprints/{blueprint_id}.json`
pub const GET_BLUEPRINT: Operation<(u64,), NoBody, Direct<Blueprint>> =
    Operation::new(HttpMethod::Get, "/v1/catalog/blueprints/%d.json");

/// `GET /v1/catalog/blueprints/{blueprint_id}/print_providers.json`
pub const LIST_BLUEPRINT_PRINT_PROVIDERS: Operation<(u64,), NoBody, Direct<Vec<PrintProvider>>> =
    Operation::new(
        HttpMethod::Get,
        "/v1/catalog/blueprints/%d/print_providers.json",
    );

/// `GET /v1/catalog/blueprints/{blueprint_id}/print_providers/{print_provider_id}/variants.json`
pub const LIST_VARIANTS: Operation<(u64, u64), NoBody, Direct<BlueprintVariants>> =
    Operation::new(
        HttpMethod::Get,
        "/v1/catalog/blueprints/%d/print_providers/%d/variants.json",
    );

/// `GET /v1/catalog/blueprints/{blueprint_id}/print_providers/{print_provider_id}/shipping.json`
pub const GET_SHIPPING: Operation<(u64, u64), NoBody, Direct<Shipping>> = Operation::new(
    HttpMethod::Get,
    "/v1/catalog/blueprints/%d/print_providers/%d/shipping.json",
);

/// `GET /v1/catalog/print_providers.json`
pub const LIST_PRINT_PROVIDERS: Operation<(), NoBody, Direct<Vec<PrintProvider>>> =
    Operation::new(HttpMethod::Get, "/v1/catalog/print_providers.json");

/// `GET /v1/catalog/print_providers/{print_provider_id}.json`
pub const GET_PRINT_PROVIDER: Operation<(u64,), NoBody, Direct<PrintProvider>> =
    Operation::new(HttpMethod::Get, "/v1/catalog/print_providers/%d.json");

impl Blueprint {
    /// Lists every blueprint in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        LIST_BLUEPRINTS.call(client, ()).await
    }

    /// Fetches a single blueprint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn find(
        client: &HttpClient,
        blueprint_id: impl PathArg<u64>,
    ) -> Result<Self, HttpError> {
        GET_BLUEPRINT.call(client, (blueprint_id,)).await
    }

    /// Lists the print providers offering a blueprint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn print_providers(
        client: &HttpClient,
        blueprint_id: impl PathArg<u64>,
    ) -> Result<Vec<PrintProvider>, HttpError> {
        LIST_BLUEPRINT_PRINT_PROVIDERS
            .call(client, (blueprint_id,))
            .await
    }

    /// Lists the variants a print provider offers for a blueprint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn variants(
        client: &HttpClient,
        blueprint_id: impl PathArg<u64>,
        print_provider_id: impl PathArg<u64>,
    ) -> Result<BlueprintVariants, HttpError> {
        LIST_VARIANTS
            .call(client, (blueprint_id, print_provider_id))
            .await
    }

    /// Fetches shipping information for a blueprint/provider pair.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn shipping(
        client: &HttpClient,
        blueprint_id: impl PathArg<u64>,
        print_provider_id: impl PathArg<u64>,
    ) -> Result<Shipping, HttpError> {
        GET_SHIPPING
            .call(client, (blueprint_id, print_provider_id))
            .await
    }
}

impl PrintProvider {
    /// Lists every print provider.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn all(client: &HttpClient) -> Result<Vec<Self>, HttpError> {
        LIST_PRINT_PROVIDERS.call(client, ()).await
    }

    /// Fetches a single print provider, including its location and
    /// blueprints.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or cannot be decoded.
    pub async fn find(
        client: &HttpClient,
        print_provider_id: impl PathArg<u64>,
    ) -> Result<Self, HttpError> {
        GET_PRINT_PROVIDER.call(client, (print_provider_id,)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{count_placeholders, EndpointConfig};
    use serde_json::json;

    fn all_configs() -> [EndpointConfig; 7] {
        [
            LIST_BLUEPRINTS.config(),
            GET_BLUEPRINT.config(),
            LIST_BLUEPRINT_PRINT_PROVIDERS.config(),
            LIST_VARIANTS.config(),
            GET_SHIPPING.config(),
            LIST_PRINT_PROVIDERS.config(),
            GET_PRINT_PROVIDER.config(),
        ]
    }

    #[test]
    fn test_catalog_templates_match_arity() {
        for config in all_configs() {
            assert_eq!(
                count_placeholders(config.template).unwrap(),
                config.arity,
                "{}",
                config.template
            );
            assert_eq!(config.method, HttpMethod::Get);
            assert!(!config.has_body);
        }
    }

    #[test]
    fn test_variants_path_uses_both_ids() {
        let request = LIST_VARIANTS.build_request((3, 99), None, None).unwrap();
        assert_eq!(
            request.path,
            "/v1/catalog/blueprints/3/print_providers/99/variants.json"
        );
    }

    #[test]
    fn test_blueprint_deserialization() {
        let blueprint: Blueprint = serde_json::from_value(json!({
            "id": 3,
            "title": "Kids Regular Fit Tee",
            "description": "<p>Soft cotton</p>",
            "brand": "Delta",
            "model": "11736",
            "images": ["https://images.printify.com/5853fe7dce46f30f8327f5cd"]
        }))
        .unwrap();

        assert_eq!(blueprint.id, 3);
        assert_eq!(blueprint.brand, "Delta");
        assert_eq!(blueprint.images.len(), 1);
    }

    #[test]
    fn test_print_provider_with_location() {
        let provider: PrintProvider = serde_json::from_value(json!({
            "id": 1,
            "title": "SPOKE Custom Products",
            "location": {
                "address1": "89 Weirfield St",
                "address2": null,
                "city": "Brooklyn",
                "country": "US",
                "region": "NY",
                "zip": "11221-5120"
            },
            "blueprints": [{"id": 34, "title": "Pillow", "brand": "Generic", "model": "Pillow", "images": []}]
        }))
        .unwrap();

        let location = provider.location.unwrap();
        assert_eq!(location.city, "Brooklyn");
        assert!(location.address2.is_none());
        assert_eq!(provider.blueprints.unwrap()[0].id, 34);
    }

    #[test]
    fn test_blueprint_variants_object() {
        let variants: BlueprintVariants = serde_json::from_value(json!({
            "id": 3,
            "title": "DJ",
            "variants": [{
                "id": 17390,
                "title": "Heather Grey / XS",
                "options": {"color": "Heather Grey", "size": "XS"},
                "placeholders": [{"position": "back", "height": 3995, "width": 3153}]
            }]
        }))
        .unwrap();

        assert_eq!(variants.variants.len(), 1);
        let variant = &variants.variants[0];
        assert_eq!(variant.options.size.as_deref(), Some("XS"));
        assert_eq!(variant.placeholders[0].position, "back");
    }

    #[test]
    fn test_shipping_accepts_string_and_number_costs() {
        let shipping: Shipping = serde_json::from_value(json!({
            "handling_time": {"value": 10, "unit": "day"},
            "profiles": [{
                "variant_ids": [12100, 12101],
                "first_item": {"currency": "USD", "cost": 450},
                "additional_items": {"currency": "USD", "cost": "0"},
                "countries": ["US"]
            }]
        }))
        .unwrap();

        assert_eq!(shipping.handling_time.value, 10);
        let profile = &shipping.profiles[0];
        assert_eq!(profile.first_item.cost, 450);
        assert_eq!(profile.additional_items.cost, 0);
        assert_eq!(profile.countries, vec!["US"]);
    }
}
