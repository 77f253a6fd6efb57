use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use patient_cell::InsurancePlan;
use shared_models::Specialty;

pub const DEFAULT_BASE_PRICE: f64 = 5000.0;

/// IOMA covers in full only for this text. No roster specialty contains it
/// (they are spelled "Kinesiología"), so IOMA patients always get the partial rate.
pub const IOMA_FULL_COVERAGE_AREA: &str = "Kinesología";

/// How the patient settles the discounted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "EFECTIVO")]
    Cash,
    #[serde(rename = "TARJETA")]
    CreditCard,
    #[serde(rename = "BILLETERA")]
    VirtualWallet,
}

impl PaymentMethod {
    /// Case-insensitive. Unknown names fall back to cash.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "EFECTIVO" => PaymentMethod::Cash,
            "TARJETA" => PaymentMethod::CreditCard,
            "BILLETERA" => PaymentMethod::VirtualWallet,
            other => {
                warn!("Unknown payment method {:?}, charging as cash", other);
                PaymentMethod::Cash
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "EFECTIVO",
            PaymentMethod::CreditCard => "TARJETA",
            PaymentMethod::VirtualWallet => "BILLETERA",
        }
    }

    /// Multiplier over the discounted price: 5% card surcharge, 2% wallet bonus.
    pub fn factor(&self) -> f64 {
        match self {
            PaymentMethod::Cash => 1.0,
            PaymentMethod::CreditCard => 1.05,
            PaymentMethod::VirtualWallet => 0.98,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasePriceRule {
    pub area: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FullCoverage {
    Always,
    WhenSpecialtyContains(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRule {
    pub plan: InsurancePlan,
    pub full_coverage: FullCoverage,
    /// Fraction waived when full coverage does not apply.
    pub partial_discount: f64,
}

impl DiscountRule {
    pub fn fraction_for(&self, specialty: &Specialty) -> f64 {
        match self.full_coverage {
            FullCoverage::Always => 1.0,
            FullCoverage::WhenSpecialtyContains(area) if specialty.contains(area) => 1.0,
            FullCoverage::WhenSpecialtyContains(_) => self.partial_discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub discount_fraction: f64,
    pub discount_amount: f64,
    pub discounted_price: f64,
    pub payment_method: PaymentMethod,
    pub total: f64,
}

/// Price lookup over (specialty, insurance plan). Base prices are checked in
/// order and the first area contained in the specialty wins.
#[derive(Debug, Clone)]
pub struct PricingPolicy {
    base_prices: Vec<BasePriceRule>,
    default_base_price: f64,
    discount_rules: Vec<DiscountRule>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl PricingPolicy {
    pub fn standard() -> Self {
        Self {
            base_prices: vec![
                BasePriceRule { area: "Cardiología", price: 8000.0 },
                BasePriceRule { area: "Neumonología", price: 7000.0 },
                BasePriceRule { area: "Kinesiología", price: 7000.0 },
            ],
            default_base_price: DEFAULT_BASE_PRICE,
            discount_rules: vec![
                DiscountRule {
                    plan: InsurancePlan::Osde,
                    full_coverage: FullCoverage::WhenSpecialtyContains("Cardiología"),
                    partial_discount: 0.20,
                },
                DiscountRule {
                    plan: InsurancePlan::Ioma,
                    full_coverage: FullCoverage::WhenSpecialtyContains(IOMA_FULL_COVERAGE_AREA),
                    partial_discount: 0.15,
                },
                DiscountRule {
                    plan: InsurancePlan::Pami,
                    full_coverage: FullCoverage::Always,
                    partial_discount: 1.0,
                },
            ],
        }
    }

    pub fn base_prices(&self) -> &[BasePriceRule] {
        &self.base_prices
    }

    pub fn discount_rules(&self) -> &[DiscountRule] {
        &self.discount_rules
    }

    pub fn base_price(&self, specialty: &Specialty) -> f64 {
        self.base_prices
            .iter()
            .find(|rule| specialty.contains(rule.area))
            .map(|rule| rule.price)
            .unwrap_or(self.default_base_price)
    }

    /// Plans without a rule get no discount.
    pub fn discount_fraction(&self, specialty: &Specialty, plan: &InsurancePlan) -> f64 {
        self.discount_rules
            .iter()
            .find(|rule| rule.plan == *plan)
            .map(|rule| rule.fraction_for(specialty))
            .unwrap_or(0.0)
    }

    /// Price after the insurance discount, before the payment adjustment.
    pub fn price(&self, specialty: &Specialty, plan: &InsurancePlan) -> f64 {
        let base = self.base_price(specialty);
        base - base * self.discount_fraction(specialty, plan)
    }

    pub fn breakdown(
        &self,
        specialty: &Specialty,
        plan: &InsurancePlan,
        payment_method: PaymentMethod,
    ) -> PriceBreakdown {
        let base_price = self.base_price(specialty);
        let discount_fraction = self.discount_fraction(specialty, plan);
        let discount_amount = base_price * discount_fraction;
        let discounted_price = base_price - discount_amount;
        let total = discounted_price * payment_method.factor();

        debug!(
            "Priced {} for {}: base ${:.2}, discount {:.0}%, total ${:.2} ({})",
            specialty,
            plan,
            base_price,
            discount_fraction * 100.0,
            total,
            payment_method
        );

        PriceBreakdown {
            base_price,
            discount_fraction,
            discount_amount,
            discounted_price,
            payment_method,
            total,
        }
    }
}
