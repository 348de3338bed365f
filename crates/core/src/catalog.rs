//! Process-wide stock catalogs. Never mutated.

use crate::domain::stock::{Region, RiskTier, StockRecord, Style};

const fn stock(
    ticker: &'static str,
    name: &'static str,
    region: Option<Region>,
    sector: &'static str,
    risk: RiskTier,
    style: Style,
    story: &'static str,
) -> StockRecord {
    StockRecord {
        ticker,
        name,
        region,
        sector,
        risk,
        style: Some(style),
        story: Some(story),
    }
}

use Region::{Saudi, Uk, Usa};
use RiskTier::{High, Low, Medium};
use Style::{Balanced, Growth, Income};

/// Universe used by the weighted advisor and the simple risk filter.
/// Names trade on eToro / Trading 212 style platforms.
#[rustfmt::skip]
pub static STOCK_UNIVERSE: &[StockRecord] = &[
    // USA large caps
    stock("MSFT", "Microsoft", Some(Usa), "Technology", Low, Balanced,
        "Mega-cap tech with cloud, AI and strong cashflow."),
    stock("AAPL", "Apple", Some(Usa), "Technology", Medium, Balanced,
        "iPhone ecosystem, strong brand and buybacks."),
    stock("NVDA", "NVIDIA", Some(Usa), "Semiconductors / AI", High, Growth,
        "Leader in GPUs and AI chips, high growth with high volatility."),
    stock("TSLA", "Tesla", Some(Usa), "EV / Energy", High, Growth,
        "Electric vehicles and energy storage, an aggressive growth play."),
    stock("AMZN", "Amazon", Some(Usa), "E-commerce / Cloud", Medium, Growth,
        "AWS plus global e-commerce, a long-term compounding business."),
    stock("KO", "Coca-Cola", Some(Usa), "Consumer Staples", Low, Income,
        "Defensive dividend stock with global brand."),
    // UK listed
    stock("ULVR.L", "Unilever", Some(Uk), "Consumer Staples", Low, Income,
        "Everyday brands with steady cashflow and dividends."),
    stock("LLOY.L", "Lloyds Bank", Some(Uk), "Banking", Medium, Income,
        "UK bank leveraged to interest rates and housing market."),
    stock("BP.L", "BP", Some(Uk), "Energy", Medium, Balanced,
        "Oil & gas with transition into renewables, cyclical but cash-rich."),
    stock("SMT.L", "Scottish Mortgage Trust", Some(Uk), "Investment Trust / Growth", High, Growth,
        "Tech-heavy global growth basket in one stock."),
    // Saudi market
    stock("2222.SR", "Saudi Aramco", Some(Saudi), "Energy", Low, Income,
        "State-backed energy giant with strong dividends."),
    stock("2010.SR", "SABIC", Some(Saudi), "Materials / Chemicals", Medium, Balanced,
        "Chemicals and materials play on global industrial demand."),
    stock("1120.SR", "Al Rajhi Bank", Some(Saudi), "Banking", Low, Income,
        "Large Islamic bank with defensive characteristics."),
];

#[rustfmt::skip]
static LIVE_USA: &[StockRecord] = &[
    stock("KO", "Coca-Cola", None, "Consumer Staples", Low, Income,
        "Defensive dividend stock with global brand."),
    stock("JNJ", "Johnson & Johnson", None, "Healthcare", Low, Income,
        "Diversified healthcare with a long dividend record."),
    stock("PG", "Procter & Gamble", None, "Consumer Staples", Low, Income,
        "Household brands with pricing power."),
    stock("MSFT", "Microsoft", None, "Technology", Medium, Balanced,
        "Cloud and productivity software with strong cashflow."),
    stock("AAPL", "Apple", None, "Technology", Medium, Balanced,
        "iPhone ecosystem, strong brand and buybacks."),
    stock("NVDA", "NVIDIA", None, "Semiconductors / AI", High, Growth,
        "Leader in GPUs and AI chips."),
    stock("TSLA", "Tesla", None, "EV / Energy", High, Growth,
        "Electric vehicles and energy storage."),
    stock("AMD", "Advanced Micro Devices", None, "Semiconductors", High, Growth,
        "CPU and GPU challenger gaining data-centre share."),
];

#[rustfmt::skip]
static LIVE_UK: &[StockRecord] = &[
    stock("ULVR.L", "Unilever", None, "Consumer Staples", Low, Income,
        "Everyday brands with steady cashflow and dividends."),
    stock("GSK.L", "GSK", None, "Pharmaceuticals", Low, Income,
        "Vaccines and specialty medicines with a reliable dividend."),
    stock("LLOY.L", "Lloyds Bank", None, "Banking", Medium, Income,
        "UK bank leveraged to interest rates and housing market."),
    stock("BP.L", "BP", None, "Energy", Medium, Balanced,
        "Oil & gas with transition into renewables."),
    stock("SMT.L", "Scottish Mortgage Trust", None, "Investment Trust / Growth", High, Growth,
        "Tech-heavy global growth basket in one stock."),
    stock("RR.L", "Rolls-Royce", None, "Aerospace", High, Growth,
        "Turnaround story in aero engines and power systems."),
];

#[rustfmt::skip]
static LIVE_SAUDI: &[StockRecord] = &[
    stock("2222.SR", "Saudi Aramco", None, "Energy", Low, Income,
        "State-backed energy giant with strong dividends."),
    stock("1120.SR", "Al Rajhi Bank", None, "Banking", Low, Income,
        "Large Islamic bank with defensive characteristics."),
    stock("2010.SR", "SABIC", None, "Materials / Chemicals", Medium, Balanced,
        "Chemicals and materials play on global industrial demand."),
    stock("7010.SR", "Saudi Telecom", None, "Telecommunications", Medium, Income,
        "Dominant telecom operator with regional expansion."),
    stock("2082.SR", "ACWA Power", None, "Utilities / Renewables", High, Growth,
        "Fast-growing power and desalination developer."),
];

#[rustfmt::skip]
static LIVE_EU: &[StockRecord] = &[
    stock("ALV.DE", "Allianz", None, "Insurance", Low, Income,
        "European insurance leader with a generous payout."),
    stock("SAN.PA", "Sanofi", None, "Pharmaceuticals", Low, Income,
        "Large pharma with a defensive dividend."),
    stock("SAP.DE", "SAP", None, "Technology", Medium, Balanced,
        "Enterprise software moving customers to the cloud."),
    stock("MC.PA", "LVMH", None, "Consumer Luxury", Medium, Growth,
        "Luxury conglomerate with global brand portfolio."),
    stock("ASML.AS", "ASML", None, "Semiconductor Equipment", High, Growth,
        "Sole supplier of EUV lithography machines."),
    stock("ADYEN.AS", "Adyen", None, "Payments", High, Growth,
        "Payments platform with high growth and high valuation."),
];

/// Region partition used by the live-priced picker.
pub fn live_partition(region: Region) -> &'static [StockRecord] {
    match region {
        Region::Usa => LIVE_USA,
        Region::Uk => LIVE_UK,
        Region::Saudi => LIVE_SAUDI,
        Region::Eu => LIVE_EU,
    }
}
