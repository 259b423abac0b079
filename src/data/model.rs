use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Penguin species. Ordered so `BTreeSet<Species>` iterates alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Island of the Palmer Archipelago where the bird was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub const ALL: [Island; 3] = [Island::Biscoe, Island::Dream, Island::Torgersen];

    pub fn as_str(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the table
// ---------------------------------------------------------------------------

/// A single observation. Measurements and sex may be missing (`NA` in the
/// source CSV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub species: Species,
    pub island: Island,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub body_mass_g: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub sex: Option<Sex>,
    pub year: u16,
}

// ---------------------------------------------------------------------------
// Column descriptors
// ---------------------------------------------------------------------------

/// The numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericColumn {
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::BillLength,
        NumericColumn::BillDepth,
        NumericColumn::FlipperLength,
        NumericColumn::BodyMass,
    ];

    /// Columns offered by the attribute selector.
    pub const SELECTABLE: [NumericColumn; 3] = [
        NumericColumn::BillLength,
        NumericColumn::BillDepth,
        NumericColumn::FlipperLength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::BillLength => "bill_length_mm",
            NumericColumn::BillDepth => "bill_depth_mm",
            NumericColumn::FlipperLength => "flipper_length_mm",
            NumericColumn::BodyMass => "body_mass_g",
        }
    }

    pub fn value(self, penguin: &Penguin) -> Option<f64> {
        match self {
            NumericColumn::BillLength => penguin.bill_length_mm,
            NumericColumn::BillDepth => penguin.bill_depth_mm,
            NumericColumn::FlipperLength => penguin.flipper_length_mm,
            NumericColumn::BodyMass => penguin.body_mass_g,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every column of the table, in source order. Used by the table widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Species,
    Island,
    Numeric(NumericColumn),
    Sex,
    Year,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::Numeric(NumericColumn::BillLength),
        Column::Numeric(NumericColumn::BillDepth),
        Column::Numeric(NumericColumn::FlipperLength),
        Column::Numeric(NumericColumn::BodyMass),
        Column::Sex,
        Column::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::Numeric(n) => n.name(),
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }

    /// Cell text as shown in the tables; missing values render as `NA`.
    pub fn format(self, penguin: &Penguin) -> String {
        match self {
            Column::Species => penguin.species.to_string(),
            Column::Island => penguin.island.to_string(),
            Column::Numeric(n) => match n.value(penguin) {
                Some(v) => format!("{v}"),
                None => "NA".to_string(),
            },
            Column::Sex => penguin
                .sex
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NA".to_string()),
            Column::Year => penguin.year.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full dataset. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct PenguinDataset {
    rows: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn from_rows(rows: Vec<Penguin>) -> Self {
        PenguinDataset { rows }
    }

    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Penguin> {
        self.rows.get(index)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin() -> Penguin {
        Penguin {
            species: Species::Gentoo,
            island: Island::Biscoe,
            bill_length_mm: Some(46.1),
            bill_depth_mm: None,
            flipper_length_mm: Some(211.0),
            body_mass_g: Some(4500.0),
            sex: None,
            year: 2007,
        }
    }

    #[test]
    fn missing_values_format_as_na() {
        let p = penguin();
        assert_eq!(Column::Numeric(NumericColumn::BillDepth).format(&p), "NA");
        assert_eq!(Column::Sex.format(&p), "NA");
        assert_eq!(Column::Numeric(NumericColumn::FlipperLength).format(&p), "211");
        assert_eq!(Column::Numeric(NumericColumn::BillLength).format(&p), "46.1");
    }

    #[test]
    fn selectable_columns_exclude_body_mass() {
        assert!(!NumericColumn::SELECTABLE.contains(&NumericColumn::BodyMass));
        assert_eq!(NumericColumn::SELECTABLE.len(), 3);
    }
}
