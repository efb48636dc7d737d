//! Column names of the listing dataset.
//!
//! Source columns are looked up by exact name; derived columns are appended
//! by the transform engine in the order they are listed here.

/// Listing identifier.
pub const ID_PROPIEDAD: &str = "id_propiedad";
/// Asking price.
pub const PRECIO: &str = "precio";
/// Property type (house, apartment, ...).
pub const TIPO_PROPIEDAD: &str = "tipo_propiedad";
/// Floor area in square metres.
pub const SUPERFICIE_M2: &str = "superficie_m2";
/// Publication date.
pub const FECHA_PUBLICACION: &str = "fecha_publicacion";

pub const PRECIO_M2: &str = "precio_m2";
pub const CATEGORIA_PRECIO: &str = "categoria_precio";
pub const ANTIGUEDAD_DIAS: &str = "antiguedad_dias";
pub const MES_PUBLICACION: &str = "mes_publicacion";
pub const ANIO_PUBLICACION: &str = "año_publicacion";
pub const RATIO_PRECIO_SUPERFICIE: &str = "ratio_precio_superficie";

/// Columns whose missing values are data-quality violations, in check order.
pub const CRITICAL_COLUMNS: [&str; 3] = [ID_PROPIEDAD, PRECIO, TIPO_PROPIEDAD];
