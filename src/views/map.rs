// src/views/map.rs
use crate::config::consts::{MAP_CENTER, MAP_SPAN_DEG};
use crate::data::DataContext;
use crate::stores::{StoreRecord, StoreType};

/// Marker palette. Two store types have their own color; the rest share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Blue,
    Green,
    Red,
}

impl MarkerColor {
    pub fn for_type(kind: &StoreType) -> Self {
        match kind {
            StoreType::Ils => MarkerColor::Blue,
            StoreType::Aidacare => MarkerColor::Green,
            StoreType::Other(_) => MarkerColor::Red,
        }
    }
}

/// Static legend, same entries regardless of data.
pub const LEGEND: [(&str, MarkerColor); 2] = [
    ("ILS", MarkerColor::Blue),
    ("Aidacare", MarkerColor::Green),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub color: MarkerColor,
    pub kind: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Marker {
    fn from_store(s: &StoreRecord) -> Option<Self> {
        let (lat, lng) = s.coordinates()?;
        Some(Self {
            lat,
            lng,
            color: MarkerColor::for_type(&s.kind),
            kind: s!(s.kind.label()),
            name: s.name.clone(),
            address: s.address.clone(),
            phone: s.phone.clone(),
        })
    }

    /// Hover text: name, address, phone.
    pub fn popup(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.address, self.phone)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub markers: Vec<Marker>,
    /// Stores left off the map for lack of coordinates.
    pub skipped: usize,
    pub center: (f64, f64),
    pub span_deg: f64,
    pub error: Option<String>,
}

impl MapView {
    pub fn compute(data: &DataContext) -> Self {
        let markers: Vec<Marker> = data.stores.iter().filter_map(Marker::from_store).collect();
        let skipped = data.stores.len() - markers.len();
        Self {
            markers,
            skipped,
            center: MAP_CENTER,
            span_deg: MAP_SPAN_DEG,
            error: data.stores_error.clone(),
        }
    }

    /// Marker nearest to a (lng, lat) plot position.
    pub fn nearest(&self, lng: f64, lat: f64) -> Option<&Marker> {
        self.markers.iter().min_by(|a, b| {
            let da = (a.lng - lng).powi(2) + (a.lat - lat).powi(2);
            let db = (b.lng - lng).powi(2) + (b.lat - lat).powi(2);
            da.total_cmp(&db)
        })
    }
}
