//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;

use std::str::FromStr;

use clap::{Args, Subcommand};
use storefront_sdk::storefront_commerce::search::{ProductSelector, QueryFilter, SortBy, SortOrder};
use storefront_sdk::storefront_commerce::{Money, ProductId};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products, filtered and sorted.
    List(ListArgs),
    /// Show one product.
    Show {
        /// Product id.
        id: ProductId,
    },
    /// Ask the API whether enough units are in stock.
    StockCheck {
        /// Product id.
        id: ProductId,
        /// Units wanted.
        quantity: u32,
    },
    /// List the categories and brands in the catalog.
    Facets,
    /// Show the featured products.
    Featured {
        /// How many to show (default: catalog.featured_limit).
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Arguments for `products list`. Every given flag must hold.
#[derive(Args)]
pub struct ListArgs {
    /// Only products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only products of this brand.
    #[arg(long)]
    pub brand: Option<String>,

    /// Keyword search over name, description, and brand.
    #[arg(short, long, conflicts_with = "available")]
    pub search: Option<String>,

    /// Only products with stock.
    #[arg(long)]
    pub available: bool,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<Money>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<Money>,

    /// Sort key: name or price.
    #[arg(long, default_value = "name")]
    pub sort_by: SortBy,

    /// Sort direction: asc or desc.
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
}

impl ListArgs {
    /// Category, brand, price bounds and sort from these flags.
    pub fn filter(&self) -> QueryFilter {
        QueryFilter {
            category: self.category.clone(),
            brand: self.brand.clone(),
            ..QueryFilter::new()
        }
        .with_price_range(self.min_price, self.max_price)
        .with_sort(self.sort_by, self.order)
    }

    /// The set to fetch before `filter` narrows it.
    pub fn selector(&self, filter: &QueryFilter) -> ProductSelector {
        if let Some(keyword) = &self.search {
            ProductSelector::keyword(keyword.as_str())
        } else if self.available {
            ProductSelector::Available
        } else {
            filter.source_selector()
        }
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Products to add, as `<id>` or `<id>:<quantity>`.
    #[arg(required = true)]
    pub items: Vec<CartItemArg>,

    /// Set a quantity after adding, as `<id>:<quantity>`; 0 or less removes.
    #[arg(long = "set", allow_hyphen_values = true)]
    pub set: Vec<QuantityArg>,

    /// Remove a product after adding.
    #[arg(long = "remove")]
    pub remove: Vec<ProductId>,
}

/// `<id>` or `<id>:<quantity>` with a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemArg {
    pub id: ProductId,
    pub quantity: u32,
}

impl FromStr for CartItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| format!("invalid quantity in '{}'", s))?;
                (id, quantity)
            }
            None => (s, 1),
        };
        if quantity == 0 {
            return Err(format!("quantity must be at least 1 in '{}'", s));
        }
        let id = id.parse::<ProductId>().map_err(|e| e.to_string())?;
        Ok(Self { id, quantity })
    }
}

/// `<id>:<quantity>`, where the quantity may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityArg {
    pub id: ProductId,
    pub quantity: i64,
}

impl FromStr for QuantityArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <id>:<quantity>, got '{}'", s))?;
        Ok(Self {
            id: id.parse::<ProductId>().map_err(|e| e.to_string())?,
            quantity: quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity in '{}'", s))?,
        })
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// API base URL to write.
        #[arg(long)]
        base_url: Option<String>,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Validate the configuration.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cart_item_parse() {
        assert_eq!(
            "3".parse::<CartItemArg>(),
            Ok(CartItemArg {
                id: ProductId::new(3),
                quantity: 1
            })
        );
        assert_eq!("6:2".parse::<CartItemArg>().map(|a| a.quantity), Ok(2));
        assert!("6:0".parse::<CartItemArg>().is_err());
        assert!("x:2".parse::<CartItemArg>().is_err());
    }

    #[test]
    fn test_quantity_parse() {
        let arg: QuantityArg = "4:-1".parse().unwrap();
        assert_eq!(arg.id, ProductId::new(4));
        assert_eq!(arg.quantity, -1);
        assert!("4".parse::<QuantityArg>().is_err());
    }

    #[derive(Parser)]
    struct ListCli {
        #[command(flatten)]
        list: ListArgs,
    }

    fn parse_list(args: &[&str]) -> Result<ListArgs, clap::Error> {
        let argv = std::iter::once("list").chain(args.iter().copied());
        ListCli::try_parse_from(argv).map(|cli| cli.list)
    }

    #[test]
    fn test_category_and_brand_together() {
        let args = parse_list(&["--category", "Footwear", "--brand", "Nike"]).unwrap();
        let filter = args.filter();

        assert_eq!(filter.category.as_deref(), Some("Footwear"));
        assert_eq!(filter.brand.as_deref(), Some("Nike"));
        assert_eq!(args.selector(&filter), ProductSelector::category("Footwear"));
    }

    #[test]
    fn test_search_narrowed_by_brand() {
        let args = parse_list(&["--search", "air", "--brand", "Nike", "--max-price", "150"]).unwrap();
        let filter = args.filter();

        assert_eq!(args.selector(&filter), ProductSelector::keyword("air"));
        assert_eq!(filter.brand.as_deref(), Some("Nike"));
        assert!(filter.max_price.is_some());
    }

    #[test]
    fn test_search_conflicts_with_available() {
        assert!(parse_list(&["--search", "air", "--available"]).is_err());
    }
}
