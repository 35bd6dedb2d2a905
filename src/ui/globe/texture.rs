#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

/// Coarse coastlines as closed (lat, lon) rings in degrees.
const CONTINENTS: &[&[(f64, f64)]] = &[
    // North America
    &[
        (70.0, -160.0), (70.0, -95.0), (60.0, -65.0), (47.0, -53.0), (44.0, -66.0),
        (30.0, -81.0), (25.0, -80.0), (30.0, -90.0), (26.0, -97.0), (18.0, -95.0),
        (21.0, -87.0), (15.0, -83.0), (8.0, -77.0), (8.0, -83.0), (16.0, -95.0),
        (23.0, -106.0), (32.0, -117.0), (40.0, -124.0), (48.0, -125.0), (58.0, -137.0),
        (60.0, -147.0), (55.0, -163.0), (60.0, -165.0), (66.0, -168.0),
    ],
    // South America
    &[
        (12.0, -72.0), (10.0, -62.0), (5.0, -52.0), (-5.0, -35.0), (-8.0, -35.0),
        (-23.0, -42.0), (-34.0, -53.0), (-40.0, -62.0), (-52.0, -68.0), (-55.0, -70.0),
        (-45.0, -75.0), (-30.0, -71.0), (-18.0, -70.0), (-5.0, -81.0), (2.0, -79.0),
        (8.0, -77.0),
    ],
    // Eurasia
    &[
        (70.0, 30.0), (73.0, 55.0), (77.0, 105.0), (72.0, 130.0), (70.0, 160.0),
        (66.0, 180.0), (60.0, 163.0), (52.0, 157.0), (60.0, 150.0), (54.0, 137.0),
        (43.0, 132.0), (39.0, 122.0), (30.0, 122.0), (22.0, 114.0), (21.0, 108.0),
        (10.0, 106.0), (1.0, 104.0), (8.0, 98.0), (16.0, 97.0), (22.0, 91.0),
        (15.0, 80.0), (8.0, 77.0), (20.0, 73.0), (25.0, 66.0), (25.0, 57.0),
        (30.0, 48.0), (22.0, 60.0), (12.0, 45.0), (13.0, 43.0), (28.0, 34.0),
        (31.0, 32.0), (37.0, 36.0), (36.0, 28.0), (41.0, 29.0), (40.0, 24.0),
        (38.0, 22.0), (40.0, 19.0), (45.0, 13.0), (40.0, 18.0), (38.0, 16.0),
        (44.0, 9.0), (43.0, 5.0), (36.0, -6.0), (37.0, -9.0), (43.0, -9.0),
        (46.0, -1.0), (48.0, -4.0), (51.0, 2.0), (54.0, 8.0), (57.0, 8.0),
        (56.0, 12.0), (60.0, 5.0), (65.0, 12.0), (71.0, 25.0),
    ],
    // Africa
    &[
        (37.0, 10.0), (32.0, 20.0), (31.0, 32.0), (22.0, 37.0), (12.0, 43.0),
        (11.0, 51.0), (2.0, 45.0), (-4.0, 40.0), (-10.0, 40.0), (-15.0, 41.0),
        (-25.0, 35.0), (-34.0, 26.0), (-34.0, 18.0), (-22.0, 14.0), (-12.0, 14.0),
        (-5.0, 12.0), (4.0, 9.0), (5.0, -4.0), (5.0, -8.0), (10.0, -15.0),
        (15.0, -17.0), (21.0, -17.0), (28.0, -13.0), (35.0, -6.0),
    ],
    // Australia
    &[
        (-11.0, 142.0), (-17.0, 146.0), (-25.0, 153.0), (-33.0, 152.0), (-38.0, 148.0),
        (-38.0, 140.0), (-32.0, 134.0), (-35.0, 118.0), (-32.0, 115.0), (-22.0, 114.0),
        (-14.0, 127.0), (-12.0, 131.0), (-12.0, 137.0), (-17.0, 141.0),
    ],
    // Greenland
    &[
        (83.0, -35.0), (82.0, -20.0), (70.0, -22.0), (60.0, -43.0), (65.0, -53.0),
        (76.0, -70.0),
    ],
    // British Isles
    &[(58.6, -5.0), (58.0, -2.0), (52.0, 2.0), (50.0, -5.0), (54.0, -3.0)],
    // Japan
    &[(45.0, 142.0), (40.0, 142.0), (35.0, 140.0), (33.0, 131.0), (35.0, 133.0), (41.0, 140.0)],
    // Antarctica
    &[
        (-65.0, -180.0), (-65.0, -60.0), (-70.0, 0.0), (-66.0, 90.0), (-67.0, 180.0),
        (-90.0, 180.0), (-90.0, -180.0),
    ],
];

const COLS: usize = 180;
const ROWS: usize = 90;

/// Land mask sampled on a 2° equirectangular grid.
#[derive(Clone)]
pub struct GlobeTexture {
    land: Vec<bool>,
}

impl std::fmt::Debug for GlobeTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let land = self.land.iter().filter(|cell| **cell).count();
        f.debug_struct("GlobeTexture")
            .field("cols", &COLS)
            .field("rows", &ROWS)
            .field("land_cells", &land)
            .finish()
    }
}

impl GlobeTexture {
    /// Rasterizes the built-in coastlines. Called once at startup.
    #[must_use]
    pub fn load() -> Self {
        let mut land = vec![false; COLS * ROWS];
        for row in 0..ROWS {
            let lat = 90.0 - (row as f64 + 0.5) * 180.0 / ROWS as f64;
            for col in 0..COLS {
                let lon = -180.0 + (col as f64 + 0.5) * 360.0 / COLS as f64;
                land[row * COLS + col] = CONTINENTS.iter().any(|ring| contains(ring, lat, lon));
            }
        }
        Self { land }
    }

    /// Latitude and longitude in radians; longitude in [-π, π].
    #[must_use]
    pub fn is_land(&self, lat: f64, lon: f64) -> bool {
        let lat = lat.to_degrees().clamp(-90.0, 90.0);
        let lon = lon.to_degrees().clamp(-180.0, 180.0);
        let row = (((90.0 - lat) / 180.0 * ROWS as f64) as usize).min(ROWS - 1);
        let col = (((lon + 180.0) / 360.0 * COLS as f64) as usize).min(COLS - 1);
        self.land[row * COLS + col]
    }
}

/// Even-odd crossing test on the (lon, lat) plane.
fn contains(ring: &[(f64, f64)], lat: f64, lon: f64) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (lat_i, lon_i) = ring[i];
        let (lat_j, lon_j) = ring[j];
        if (lat_i > lat) != (lat_j > lat) {
            let crossing = lon_i + (lat - lat_i) / (lat_j - lat_i) * (lon_j - lon_i);
            if lon < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land_at(texture: &GlobeTexture, lat: f64, lon: f64) -> bool {
        texture.is_land(lat.to_radians(), lon.to_radians())
    }

    #[test]
    fn known_landmasses_are_land() {
        let texture = GlobeTexture::load();
        assert!(land_at(&texture, 40.0, -100.0), "central US");
        assert!(land_at(&texture, 0.0, 20.0), "Congo basin");
        assert!(land_at(&texture, 50.0, 90.0), "Siberia");
        assert!(land_at(&texture, -25.0, 135.0), "Outback");
        assert!(land_at(&texture, -10.0, -55.0), "Amazon");
    }

    #[test]
    fn open_ocean_is_water() {
        let texture = GlobeTexture::load();
        assert!(!land_at(&texture, 0.0, -150.0), "central Pacific");
        assert!(!land_at(&texture, 30.0, -40.0), "north Atlantic");
        assert!(!land_at(&texture, -30.0, 80.0), "Indian Ocean");
    }

    #[test]
    fn polar_south_is_land() {
        let texture = GlobeTexture::load();
        assert!(land_at(&texture, -85.0, 0.0));
        assert!(land_at(&texture, -89.9, 179.9));
    }
}
