use serde::Serialize;

/// One ranked row of the CoinMarketCap table. Values are the cell text as
/// shown on the page, trimmed but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub rank: u32,
    pub name: String,
    pub price: String,
    pub change_1h: String,
    pub change_24h: String,
    pub change_7d: String,
    pub market_cap: String,
    pub volume: String,
    pub circulating_supply: String,
}

/// String-valued columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Change1h,
    Change24h,
    Change7d,
    MarketCap,
    Volume,
    CirculatingSupply,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Price,
        Field::Change1h,
        Field::Change24h,
        Field::Change7d,
        Field::MarketCap,
        Field::Volume,
        Field::CirculatingSupply,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Change1h => "change_1h",
            Field::Change24h => "change_24h",
            Field::Change7d => "change_7d",
            Field::MarketCap => "market_cap",
            Field::Volume => "volume",
            Field::CirculatingSupply => "circulating_supply",
        }
    }
}

impl Record {
    pub fn new(rank: u32) -> Self {
        Self {
            rank,
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Change1h => &self.change_1h,
            Field::Change24h => &self.change_24h,
            Field::Change7d => &self.change_7d,
            Field::MarketCap => &self.market_cap,
            Field::Volume => &self.volume,
            Field::CirculatingSupply => &self.circulating_supply,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Price => &mut self.price,
            Field::Change1h => &mut self.change_1h,
            Field::Change24h => &mut self.change_24h,
            Field::Change7d => &mut self.change_7d,
            Field::MarketCap => &mut self.market_cap,
            Field::Volume => &mut self.volume,
            Field::CirculatingSupply => &mut self.circulating_supply,
        };
        *slot = value;
    }
}

/// Where the rows live and which cell feeds which field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub row_selector: String,
    pub max_rows: usize,
    pub columns: Vec<(usize, Field)>,
}

// Layout of the CMC home table as of mid 2024: star, rank, then data cells.
pub const DEFAULT_ROW_SELECTOR: &str = "table.cmc-table > tbody > tr";
pub const DEFAULT_MAX_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: [(usize, Field); 8] = [
    (2, Field::Name),
    (3, Field::Price),
    (4, Field::Change1h),
    (5, Field::Change24h),
    (6, Field::Change7d),
    (7, Field::MarketCap),
    (8, Field::Volume),
    (9, Field::CirculatingSupply),
];

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
            columns: DEFAULT_COLUMNS.to_vec(),
        }
    }
}

impl TableSchema {
    /// Number of cells a non-empty row must have for every column to resolve.
    pub fn required_cells(&self) -> usize {
        self.columns.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0)
    }
}
