//! The fixed NIFTY50 scan universe.

/// One scannable symbol and its Kite instrument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: &'static str,
    pub token: u32,
}

const fn ins(symbol: &'static str, token: u32) -> Instrument {
    Instrument { symbol, token }
}

/// Symbol -> instrument-token table, in universe iteration order.
///
/// Built once at compile time; survivor sets and log lines follow this order.
pub fn nifty50() -> &'static [Instrument] {
    &NIFTY50
}

static NIFTY50: [Instrument; 49] = [
    ins("ADANIENT", 6401),
    ins("ADANIPORTS", 3861249),
    ins("APOLLOHOSP", 40193),
    ins("ASIANPAINT", 60417),
    ins("AXISBANK", 1510401),
    ins("BAJAJ-AUTO", 4267265),
    ins("BAJFINANCE", 81153),
    ins("BAJAJFINSV", 4268801),
    ins("BHARTIARTL", 2714625),
    ins("BPCL", 134657),
    ins("BRITANNIA", 140033),
    ins("CIPLA", 177665),
    ins("COALINDIA", 5215745),
    ins("DIVISLAB", 2800641),
    ins("DRREDDY", 225537),
    ins("EICHERMOT", 232961),
    ins("GRASIM", 315393),
    ins("HCLTECH", 1850625),
    ins("HDFCBANK", 341249),
    ins("HDFCLIFE", 119553),
    ins("HEROMOTOCO", 345089),
    ins("HINDALCO", 348929),
    ins("HINDUNILVR", 356865),
    ins("ICICIBANK", 1270529),
    ins("INDUSINDBK", 1346049),
    ins("INFY", 408065),
    ins("ITC", 424961),
    ins("JSWSTEEL", 3001089),
    ins("KOTAKBANK", 492033),
    ins("LT", 2939649),
    ins("M&M", 519937),
    ins("MARUTI", 2815745),
    ins("NESTLEIND", 4598529),
    ins("NTPC", 2977281),
    ins("ONGC", 633601),
    ins("POWERGRID", 3834113),
    ins("RELIANCE", 738561),
    ins("SBILIFE", 5582849),
    ins("SBIN", 779521),
    ins("SUNPHARMA", 857857),
    ins("TATACONSUM", 878593),
    ins("TATAMOTORS", 884737),
    ins("TATASTEEL", 895745),
    ins("TCS", 2953217),
    ins("TECHM", 3465729),
    ins("TITAN", 897537),
    ins("ULTRACEMCO", 2952193),
    ins("UPL", 2889473),
    ins("WIPRO", 969473),
];
