//! Display names for the OMIE sensors and the device that groups them.

use serde::Serialize;

use crate::translated::Translated;

/// Labels for the spot-price sensor entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EntityNames {
    pub spot_price_es: &'static str,
    pub spot_price_pt: &'static str,
    pub spot_price_es_hour: &'static str,
    pub spot_price_pt_hour: &'static str,
    pub spot_price_es_day: &'static str,
    pub spot_price_pt_day: &'static str,
    pub spot_price_es_tomorrow: &'static str,
    pub spot_price_pt_tomorrow: &'static str,
}

impl EntityNames {
    /// The label for one sensor.
    pub const fn name(&self, sensor: SpotPriceSensor) -> &'static str {
        use Granularity::*;
        use Market::*;

        match (sensor.market, sensor.granularity) {
            (Spain, QuarterHour) => self.spot_price_es,
            (Portugal, QuarterHour) => self.spot_price_pt,
            (Spain, Hour) => self.spot_price_es_hour,
            (Portugal, Hour) => self.spot_price_pt_hour,
            (Spain, DayAverage) => self.spot_price_es_day,
            (Portugal, DayAverage) => self.spot_price_pt_day,
            (Spain, Tomorrow) => self.spot_price_es_tomorrow,
            (Portugal, Tomorrow) => self.spot_price_pt_tomorrow,
        }
    }
}

/// Labels for the device entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceNames {
    pub device_manufacturer: &'static str,
    pub device_name: &'static str,
    pub device_model: &'static str,
}

/// Bidding zone of the MIBEL market.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Market {
    Spain,
    Portugal,
}

impl Market {
    pub const fn code(self) -> &'static str {
        match self {
            Market::Spain => "es",
            Market::Portugal => "pt",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// 15-minute market periods.
    QuarterHour,
    Hour,
    DayAverage,
    /// Next-day prices, published once the auction closes.
    Tomorrow,
}

/// One of the eight spot-price sensors, keyed like the [`EntityNames`] fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpotPriceSensor {
    pub market: Market,
    pub granularity: Granularity,
}

impl SpotPriceSensor {
    pub const ALL: [SpotPriceSensor; 8] = [
        Self::new(Market::Spain, Granularity::QuarterHour),
        Self::new(Market::Portugal, Granularity::QuarterHour),
        Self::new(Market::Spain, Granularity::Hour),
        Self::new(Market::Portugal, Granularity::Hour),
        Self::new(Market::Spain, Granularity::DayAverage),
        Self::new(Market::Portugal, Granularity::DayAverage),
        Self::new(Market::Spain, Granularity::Tomorrow),
        Self::new(Market::Portugal, Granularity::Tomorrow),
    ];

    pub const fn new(market: Market, granularity: Granularity) -> Self {
        Self {
            market,
            granularity,
        }
    }

    /// The matching [`EntityNames`] field name, e.g. `spot_price_pt_hour`.
    pub const fn key(self) -> &'static str {
        use Granularity::*;
        use Market::*;

        match (self.market, self.granularity) {
            (Spain, QuarterHour) => "spot_price_es",
            (Portugal, QuarterHour) => "spot_price_pt",
            (Spain, Hour) => "spot_price_es_hour",
            (Portugal, Hour) => "spot_price_pt_hour",
            (Spain, DayAverage) => "spot_price_es_day",
            (Portugal, DayAverage) => "spot_price_pt_day",
            (Spain, Tomorrow) => "spot_price_es_tomorrow",
            (Portugal, Tomorrow) => "spot_price_pt_tomorrow",
        }
    }
}

pub static ENTITY_NAMES: Translated<EntityNames> = Translated::new(
    EntityNames {
        spot_price_es: "Marginal price (15 min) - Spain",
        spot_price_pt: "Marginal price (15 min) - Portugal",
        spot_price_es_hour: "Marginal price (hour) - Spain",
        spot_price_pt_hour: "Marginal price (hour) - Portugal",
        spot_price_es_day: "Marginal price (day avg) - Spain",
        spot_price_pt_day: "Marginal price (day avg) - Portugal",
        spot_price_es_tomorrow: "Marginal price tomorrow - Spain",
        spot_price_pt_tomorrow: "Marginal price tomorrow - Portugal",
    },
    EntityNames {
        spot_price_es: "Precio marginal (15 min) - España",
        spot_price_pt: "Precio marginal (15 min) - Portugal",
        spot_price_es_hour: "Precio marginal (hora) - España",
        spot_price_pt_hour: "Precio marginal (hora) - Portugal",
        spot_price_es_day: "Precio marginal (media diaria) - España",
        spot_price_pt_day: "Precio marginal (media diaria) - Portugal",
        spot_price_es_tomorrow: "Precio marginal mañana - España",
        spot_price_pt_tomorrow: "Precio marginal mañana - Portugal",
    },
    EntityNames {
        spot_price_es: "Preço marginal (15 min) - Espanha",
        spot_price_pt: "Preço marginal (15 min) - Portugal",
        spot_price_es_hour: "Preço marginal (hora) - Espanha",
        spot_price_pt_hour: "Preço marginal (hora) - Portugal",
        spot_price_es_day: "Preço marginal (média diária) - Espanha",
        spot_price_pt_day: "Preço marginal (média diária) - Portugal",
        spot_price_es_tomorrow: "Preço marginal amanhã - Espanha",
        spot_price_pt_tomorrow: "Preço marginal amanhã - Portugal",
    },
);

pub static DEVICE_NAMES: Translated<DeviceNames> = Translated::new(
    DeviceNames {
        device_manufacturer: "OMI Group",
        device_name: "OMIE",
        device_model: "MIBEL market results",
    },
    DeviceNames {
        device_manufacturer: "Grupo OMI",
        device_name: "OMIE",
        device_model: "Resultados del MIBEL",
    },
    DeviceNames {
        device_manufacturer: "Grupo OMI",
        device_name: "OMIE",
        device_model: "Resultados do MIBEL",
    },
);

/// Sensor labels for a locale tag (English if unsupported).
pub fn entity_names(locale: &str) -> &'static EntityNames {
    ENTITY_NAMES.get(locale)
}

/// Device labels for a locale tag (English if unsupported).
pub fn device_names(locale: &str) -> &'static DeviceNames {
    DEVICE_NAMES.get(locale)
}
