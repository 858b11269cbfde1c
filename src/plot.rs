use std::path::Path;

use plotly::common::{Mode, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Layout, Plot, Scatter};

use crate::cross_section::CrossSection;
use crate::target::BeamInTarget;

//=====================================================================
// Interactive HTML plots of cross sections and of the beam in a target.
//=====================================================================

/// Line plot of several cross sections on a common energy grid.
pub fn cross_section_plot(
    title: &str,
    energies: &[f64],
    cross_sections: &[(&str, &dyn CrossSection)],
    log_y: bool,
) -> Plot {
    let mut plot = Plot::new();
    for (name, cross_section) in cross_sections {
        let trace = Scatter::new(energies.to_vec(), cross_section.evaluate_many(energies))
            .mode(Mode::Lines)
            .name(*name);
        plot.add_trace(trace);
    }

    let y_axis = Axis::new().title(Title::with_text("cross section (fm^2)"));
    let y_axis = if log_y { y_axis.type_(AxisType::Log) } else { y_axis };
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(title))
            .x_axis(Axis::new().title(Title::with_text("energy (MeV)")))
            .y_axis(y_axis),
    );
    plot
}

/// Photon flux density at several depths of a target as a function of
/// the energy.
pub fn photon_flux_density_plot(
    title: &str,
    beam: &BeamInTarget,
    energies: &[f64],
    depths: &[f64],
) -> Plot {
    let mut plot = Plot::new();
    for &depth in depths {
        let flux: Vec<f64> = energies
            .iter()
            .map(|&energy| beam.photon_flux_density(depth, energy))
            .collect();
        let trace = Scatter::new(energies.to_vec(), flux)
            .mode(Mode::Lines)
            .name(&format!("{:.3e} atoms/fm^2", depth));
        plot.add_trace(trace);
    }
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(title))
            .x_axis(Axis::new().title(Title::with_text("energy (MeV)")))
            .y_axis(Axis::new().title(Title::with_text("photon flux density"))),
    );
    plot
}

pub fn write_html<P: AsRef<Path>>(plot: &Plot, path: P) {
    let path = path.as_ref();
    plot.write_html(path);
    log::info!("Wrote {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::cross_section::ConstantCrossSection;
    use crate::resonance::{GridRange, MaxwellBoltzmann, Resonance, Transition};
    use crate::utils::testing::{B11, B11_AMU};

    #[test]
    fn test_doppler_broadening_plot() {
        let transition = || {
            Transition::new(
                B11.ground_state.clone().unwrap(),
                B11.excited_state("5/2^-_1").unwrap().clone(),
            )
        };
        let maxwell_boltzmann = MaxwellBoltzmann::new(B11_AMU, 293.0);
        let breit_wigner = Resonance::breit_wigner(transition()).unwrap();
        let voigt = Resonance::voigt(transition(), &maxwell_boltzmann).unwrap();
        let energies = voigt.energy_grid(GridRange::Coverage(0.99), 500).unwrap();

        let plot = cross_section_plot(
            "Doppler broadening",
            &energies,
            &[
                ("Breit-Wigner", &breit_wigner as &dyn CrossSection),
                ("Voigt", &voigt as &dyn CrossSection),
            ],
            true,
        );
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doppler_broadening.html");
        write_html(&plot, &path);
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Doppler broadening"));
        assert!(html.contains("Breit-Wigner"));
    }

    #[test]
    fn test_photon_flux_density_plot() {
        let beam = BeamInTarget::new(
            Arc::new(ConstantCrossSection(1.0)),
            Arc::new(ConstantCrossSection(0.5)),
        );
        let plot = photon_flux_density_plot("flux", &beam, &[1.0, 2.0], &[0.0, 1.0]);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flux.html");
        write_html(&plot, &path);
        assert!(path.exists());
    }
}
