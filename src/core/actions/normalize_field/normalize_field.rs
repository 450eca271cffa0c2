use rayon::prelude::*;

use crate::core::actions::normalize_field::ports::intensity_map::IntensityMap;
use crate::core::data::field::Field;
use crate::core::data::normalized_field::{IntensityData, NormalizedField};
use crate::core::errors::FractalError;

/// Maps every cell of `field` through `mapper`, keeping the field's shape.
pub fn normalize_field<Map>(field: &Field, mapper: &Map) -> Result<NormalizedField, FractalError>
where
    Map: IntensityMap + Sync,
{
    let intensities: IntensityData = field
        .data()
        .par_iter()
        .map(|&iterations| mapper.map(iterations))
        .collect::<Result<_, _>>()?;

    NormalizedField::from_data(field.pixel_rect(), intensities)
}
