//! Curated sample datasets for pre-populating a session.

use crate::enums::Industry;

/// A sample text with its category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub text: &'static str,
    pub category: &'static str,
}

const fn sample(text: &'static str, category: &'static str) -> Sample {
    Sample { text, category }
}

pub const FINANCE_SAMPLES: &[Sample] = &[
    sample(
        "Company reports Q3 earnings beat expectations with 15% revenue growth",
        "earnings",
    ),
    sample(
        "Stock plunges 20% after disappointing quarterly results and weak guidance",
        "stock_market",
    ),
    sample(
        "Federal Reserve maintains interest rates, signaling cautious optimism",
        "policy",
    ),
    sample(
        "Banking sector shows strong resilience with improved capital ratios",
        "banking",
    ),
    sample(
        "Market volatility rises amid concerns over inflation and economic slowdown",
        "market_trend",
    ),
    sample(
        "Tech stocks rally on strong earnings reports and AI optimism",
        "tech",
    ),
    sample(
        "Credit default risk increases for commercial real estate sector",
        "risk",
    ),
    sample(
        "Treasury yields remain stable as investors await policy decisions",
        "bonds",
    ),
    sample(
        "Investment firm launches new sustainable finance initiative",
        "esg",
    ),
    sample(
        "Bank faces regulatory scrutiny over lending practices",
        "regulation",
    ),
];

pub const GOVERNMENT_SAMPLES: &[Sample] = &[
    sample(
        "The new online portal is easy to use and saved me a lot of time!",
        "digital_services",
    ),
    sample(
        "Waited 3 hours at the DMV only to be told to come back another day",
        "dmv",
    ),
    sample(
        "The service was adequate, staff followed standard procedures",
        "service_quality",
    ),
    sample(
        "Excellent customer service! Agent was knowledgeable and solved my issue quickly",
        "service_quality",
    ),
    sample(
        "Website is confusing and doesn't provide clear information about requirements",
        "digital_services",
    ),
    sample(
        "Applied for permit online - simple process, received approval in 2 days",
        "permits",
    ),
    sample(
        "Phone system kept disconnecting and couldn't reach a human representative",
        "customer_support",
    ),
    sample(
        "Standard processing time, received response within expected timeframe",
        "processing",
    ),
    sample(
        "Staff was professional and courteous, made the experience pleasant",
        "service_quality",
    ),
    sample(
        "The new mobile app makes accessing services so much more convenient",
        "digital_services",
    ),
];

/// Sample dataset for an industry.
#[must_use]
pub const fn for_industry(industry: Industry) -> &'static [Sample] {
    match industry {
        Industry::Finance => FINANCE_SAMPLES,
        Industry::Government => GOVERNMENT_SAMPLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_datasets_have_ten_tagged_items() {
        for industry in [Industry::Finance, Industry::Government] {
            let samples = for_industry(industry);
            assert_eq!(samples.len(), 10);
            assert!(samples.iter().all(|s| !s.text.is_empty() && !s.category.is_empty()));
        }
    }

    #[test]
    fn sample_texts_contain_no_double_quotes() {
        assert!(
            FINANCE_SAMPLES
                .iter()
                .chain(GOVERNMENT_SAMPLES)
                .all(|s| !s.text.contains('"'))
        );
    }
}
