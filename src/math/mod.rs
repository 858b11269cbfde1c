mod faddeeva;
mod roots;
mod special;

pub use faddeeva::{faddeeva, voigt_profile};
pub use roots::{bisect, newton, newton_bisect, RootOptions};
pub use special::{erf, erfc, normal_cdf, normal_pdf, normal_ppf, normal_sigma_from_fwhm};
