mod klein_nishina;
mod xrmac;
mod xrmac_library;

pub use klein_nishina::KleinNishina;
pub use xrmac::{cm2_per_g_to_fm2_per_atom, Xrmac, XrmacData};
pub use xrmac_library::{
    xrmac_file_name, Attenuation, AttenuationUnit, XrmacLibrary, XRMAC_DIR_ENV, XRMAC_MAX_Z,
};
