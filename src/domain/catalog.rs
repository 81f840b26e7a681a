// FRED series catalog - the fixed set of series the dashboard tracks
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub description: &'static str,
}

pub const SERIES_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "A191RL1A225NBEA",
        description: "Real Personal Consumption Expenditures",
    },
    CatalogEntry {
        id: "AHETPI",
        description: "\"Average Hourly Earnings: Total Private, All Employees\"",
    },
    CatalogEntry {
        id: "AWHMAN",
        description: "Average Weekly Hours of Manufacturing Employees: Total Private",
    },
    CatalogEntry {
        id: "AWHNONAG",
        description: "Average Weekly Hours of Production and Nonsupervisory Employees: Total Private",
    },
    CatalogEntry {
        id: "BUSINV",
        description: "Business Inventories",
    },
    CatalogEntry {
        id: "CFNAI",
        description: "Chicago Fed National Activity Index",
    },
    CatalogEntry {
        id: "CIVPART",
        description: "Civilian Employment-Population Ratio",
    },
    CatalogEntry {
        id: "CLF16OV",
        description: "Civilian Labor Force",
    },
    CatalogEntry {
        id: "CP",
        description: "Corporate Profits After Tax (Seasonally Adjusted)",
    },
    CatalogEntry {
        id: "CPIAUCSL",
        description: "Consumer Price Index for All Urban Consumers: All Items",
    },
    CatalogEntry {
        id: "CPILFESL",
        description: "Core Consumer Price Index (Excludes Food and Energy)",
    },
    CatalogEntry {
        id: "CSUSHPINSA",
        description: "S&P/Case-Shiller U.S. National Home Price Index",
    },
    CatalogEntry {
        id: "CUSR0000SEHA",
        description: "Consumer Price Index for Urban Wage Earners and Clerical Workers: All Items",
    },
    CatalogEntry {
        id: "DCOILWTICO",
        description: "West Texas Intermediate (WTI) Crude Oil Price",
    },
    CatalogEntry {
        id: "DGORDER",
        description: "Durable Goods Orders",
    },
    CatalogEntry {
        id: "DGS10",
        description: "10-Year Treasury Constant Maturity Rate",
    },
    CatalogEntry {
        id: "DGS1MO",
        description: "1-Month Treasury Constant Maturity Rate",
    },
    CatalogEntry {
        id: "DGS2",
        description: "2-Year Treasury Constant Maturity Rate",
    },
    CatalogEntry {
        id: "DGS30",
        description: "30-Year Treasury Constant Maturity Rate",
    },
    CatalogEntry {
        id: "DGS3MO",
        description: "3-Month Treasury Bill: Secondary Market Rate",
    },
    CatalogEntry {
        id: "DGS5",
        description: "5-Year Treasury Constant Maturity Rate",
    },
    CatalogEntry {
        id: "DGS6MO",
        description: "6-Month Treasury Bill: Secondary Market Rate",
    },
    CatalogEntry {
        id: "DHHNGSP",
        description: "Henry Hub Natural Gas Spot Price",
    },
    CatalogEntry {
        id: "DJIA",
        description: "Dow Jones Industrial Average",
    },
    CatalogEntry {
        id: "DSPIC96",
        description: "Real Disposable Personal Income",
    },
    CatalogEntry {
        id: "EXHOSLUSM495S",
        description: "Existing Home Sales",
    },
    CatalogEntry {
        id: "EXPGS",
        description: "Exports of Goods and Services",
    },
    CatalogEntry {
        id: "FEDFUNDS",
        description: "Effective Federal Funds Rate",
    },
    CatalogEntry {
        id: "GDP",
        description: "Gross Domestic Product (Nominal)",
    },
    CatalogEntry {
        id: "GDPC1",
        description: "Real Gross Domestic Product (Chained 2012 Dollars)",
    },
    CatalogEntry {
        id: "GDPCA",
        description: "Gross Domestic Product: Chain-type Price Index",
    },
    CatalogEntry {
        id: "GDPDEF",
        description: "Gross Domestic Product Deflator",
    },
    CatalogEntry {
        id: "GDPPOT",
        description: "Potential Gross Domestic Product",
    },
    CatalogEntry {
        id: "GFDEBTN",
        description: "Federal Debt: Total Public Debt",
    },
    CatalogEntry {
        id: "GNPCA",
        description: "Gross National Product, Chain-type Price Index",
    },
    CatalogEntry {
        id: "GPDI",
        description: "Gross Private Domestic Investment",
    },
    CatalogEntry {
        id: "HOUST",
        description: "Housing Starts",
    },
    CatalogEntry {
        id: "ICSA",
        description: "Initial Unemployment Claims",
    },
    CatalogEntry {
        id: "IMPGS",
        description: "Imports of Goods and Services",
    },
    CatalogEntry {
        id: "INDPRO",
        description: "Industrial Production Index",
    },
    CatalogEntry {
        id: "IPFINAL",
        description: "Industrial Production: Final Products",
    },
    CatalogEntry {
        id: "IPMAN",
        description: "Industrial Production: Manufacturing",
    },
    CatalogEntry {
        id: "IPMANNS",
        description: "Industrial Production: Manufacturing (Not Seasonally Adjusted)",
    },
    CatalogEntry {
        id: "JTSJOL",
        description: "Job Openings (JOLTS)",
    },
    CatalogEntry {
        id: "M1REAL",
        description: "Real M1 Money Stock",
    },
    CatalogEntry {
        id: "M1SL",
        description: "M1 Money Stock",
    },
    CatalogEntry {
        id: "M2REAL",
        description: "Real M2 Money Stock",
    },
    CatalogEntry {
        id: "M2SL",
        description: "M2 Money Stock",
    },
    CatalogEntry {
        id: "MORTGAGE15US",
        description: "15-Year Fixed Rate Mortgage Average",
    },
    CatalogEntry {
        id: "MORTGAGE30US",
        description: "30-Year Fixed Rate Mortgage Average",
    },
    CatalogEntry {
        id: "NETEXP",
        description: "Net Exports of Goods and Services",
    },
    CatalogEntry {
        id: "NFCI",
        description: "National Financial Conditions Index",
    },
    CatalogEntry {
        id: "PAYEMS",
        description: "Total Nonfarm Payrolls",
    },
    CatalogEntry {
        id: "PAYNSA",
        description: "Total Nonfarm Payrolls: Not Seasonally Adjusted",
    },
    CatalogEntry {
        id: "PCEC",
        description: "Personal Consumption Expenditures",
    },
    CatalogEntry {
        id: "PCEPI",
        description: "Personal Consumption Expenditures: Price Index",
    },
    CatalogEntry {
        id: "PERMITNSA",
        description: "New Private Housing Units Authorized by Building Permits",
    },
    CatalogEntry {
        id: "PI",
        description: "Personal Income",
    },
    CatalogEntry {
        id: "PPIACO",
        description: "Producer Price Index for All Commodities",
    },
    CatalogEntry {
        id: "PPIITM",
        description: "Producer Price Index: Intermediate Materials",
    },
    CatalogEntry {
        id: "PSAVERT",
        description: "Personal Savings Rate",
    },
    CatalogEntry {
        id: "RECPROUSM156N",
        description: "Real Estate Price Index: U.S. All-Transactions",
    },
    CatalogEntry {
        id: "RSAFS",
        description: "Retail Sales",
    },
    CatalogEntry {
        id: "SP500",
        description: "S&P 500 Index",
    },
    CatalogEntry {
        id: "STLFSI",
        description: "St. Louis Financial Stress Index",
    },
    CatalogEntry {
        id: "T10Y2Y",
        description: "10-Year Treasury Minus 2-Year Treasury Yield Spread",
    },
    CatalogEntry {
        id: "T10YIE",
        description: "10-Year Breakeven Inflation Rate",
    },
    CatalogEntry {
        id: "T5YIE",
        description: "5-Year Breakeven Inflation Rate",
    },
    CatalogEntry {
        id: "TCU",
        description: "Capacity Utilization: Total Industry",
    },
    CatalogEntry {
        id: "TEDRATE",
        description: "TED Spread",
    },
    CatalogEntry {
        id: "TOTALSA",
        description: "Total Vehicle Sales",
    },
    CatalogEntry {
        id: "TOTALSL",
        description: "Consumer Credit Outstanding (Total)",
    },
    CatalogEntry {
        id: "TOTCI",
        description: "Total Construction Spending",
    },
    CatalogEntry {
        id: "TWEXB",
        description: "Trade Weighted U.S. Dollar Index",
    },
    CatalogEntry {
        id: "U6RATE",
        description: "U6 Unemployment Rate",
    },
    CatalogEntry {
        id: "UMCSENT",
        description: "University of Michigan Consumer Sentiment Index",
    },
    CatalogEntry {
        id: "UNRATE",
        description: "Civilian Unemployment Rate",
    },
    CatalogEntry {
        id: "UNRATENSA",
        description: "Civilian Unemployment Rate: Not Seasonally Adjusted",
    },
    CatalogEntry {
        id: "USREC",
        description: "US Recession Probabilities (NBER-based)",
    },
    CatalogEntry {
        id: "VIXCLS",
        description: "CBOE Volatility Index",
    },
    CatalogEntry {
        id: "W875RX1",
        description: "Federal Surplus/Deficit as Percent of GDP",
    },
    CatalogEntry {
        id: "WALCL",
        description: "Total Assets of the Federal Reserve (H.4.1 Data)",
    },
];

pub fn description_for(series_id: &str) -> Option<&'static str> {
    SERIES_CATALOG
        .iter()
        .find(|entry| entry.id == series_id)
        .map(|entry| entry.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        for pair in SERIES_CATALOG.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "catalog out of order at {} / {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(SERIES_CATALOG.len(), 82);
    }

    #[test]
    fn test_description_lookup() {
        assert_eq!(
            description_for("UNRATE"),
            Some("Civilian Unemployment Rate")
        );
        assert_eq!(description_for("NOPE"), None);
    }
}
