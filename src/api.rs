use crate::errors::GeoResult;
use crate::geo::{BoundedBox, Coordinate, DistanceUnit};
use crate::geo::distance::distance_between;
use crate::parser::parse_coordinate;
use crate::utils::logger::Logger;

/// Main interface to the radarkit library
///
/// Wraps the parsing and distance operations behind one logger-owning
/// entry point, for callers that embed the geodesy core (e.g. the
/// tracking display) rather than driving the modules directly. Every
/// operation is recorded in the session log file.
pub struct RadarKit {
    logger: Logger,
}

impl RadarKit {
    /// Create a new RadarKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "radarkit.log"
    ///
    /// # Returns
    /// A RadarKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> GeoResult<Self> {
        let log_path = log_file.unwrap_or("radarkit.log");
        let logger = Logger::new(log_path)?;
        Ok(RadarKit { logger })
    }

    /// Parse coordinate text in DMS or decimal notation
    ///
    /// # Arguments
    /// * `text` - Coordinate text, e.g. `48°51'30"N 2°17'40"E` or "48.8583, 2.2944"
    ///
    /// # Returns
    /// The parsed coordinate, or a parse error or log write error
    pub fn parse(&self, text: &str) -> GeoResult<Coordinate> {
        let coord = parse_coordinate(text)?;
        self.logger.log(&format!("Parsed '{}' -> {}", text, coord))?;
        Ok(coord)
    }

    /// Great-circle distance between two coordinate strings
    ///
    /// Both inputs may be DMS or decimal notation.
    ///
    /// # Arguments
    /// * `from` - First coordinate text
    /// * `to` - Second coordinate text
    /// * `unit` - Unit for the result
    ///
    /// # Returns
    /// Distance in the requested unit, or a parse error or log write error
    pub fn distance(&self, from: &str, to: &str, unit: DistanceUnit) -> GeoResult<f64> {
        let p1 = parse_coordinate(from)?;
        let p2 = parse_coordinate(to)?;

        let dist = distance_between(p1, p2, unit);
        self.logger.log(&format!("Distance {} -> {}: {:.3} {}", p1, p2, dist, unit))?;
        Ok(dist)
    }

    /// Bounding box for a radius around a coordinate string
    ///
    /// # Arguments
    /// * `center` - Center coordinate text (DMS or decimal)
    /// * `radius` - Search radius in `unit`
    /// * `unit` - Unit of the radius
    ///
    /// # Returns
    /// The derived box, or a parse error or log write error
    pub fn bounding_box(&self, center: &str, radius: f64, unit: DistanceUnit) -> GeoResult<BoundedBox> {
        let center = parse_coordinate(center)?;

        let bbox = BoundedBox::from_center_radius(center, radius, unit);
        self.logger.log(&format!("Bounding box {} {} around {}: {}",
                                 radius, unit, center, bbox))?;
        Ok(bbox)
    }
}
