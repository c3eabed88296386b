use crate::distance::Point;
use crate::error::{TspError, TspResult};
use crate::route::Route;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the tour as `order,city,x,y` rows. The first city is repeated at
/// the end so plotting the rows in order draws the closed loop.
pub fn write_route_csv<W: Write>(writer: W, route: &Route, points: &[Point]) -> TspResult<()> {
    if points.len() != route.len() {
        return Err(TspError::Validation(format!(
            "route has {} cities but {} coordinates were given",
            route.len(),
            points.len()
        )));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["order", "city", "x", "y"])?;

    let closing = route.cities().first().copied();
    for (order, &city) in route.cities().iter().chain(closing.iter()).enumerate() {
        let p = points[city];
        wtr.write_record(&[
            order.to_string(),
            city.to_string(),
            p.x.to_string(),
            p.y.to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| TspError::Csv(e.into()))?;
    Ok(())
}

pub fn export_route_csv<P: AsRef<Path>>(path: P, route: &Route, points: &[Point]) -> TspResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TspError::io(path, e))?;
    write_route_csv(file, route, points)?;
    info!("💾 Route written to {}", path.display());
    Ok(())
}
