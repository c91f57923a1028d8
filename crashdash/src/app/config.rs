use chart_export::ChartStyle;
use dash_core::string_error::ErrorStringExt;
use std::{io::Read, path::PathBuf, str::FromStr};

#[derive(Debug)]
pub struct Config {
    pub data_path: PathBuf,
    pub svg_width: u64,
    pub svg_height: u64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_path = PathBuf::from("airplane_crashes.csv");
        let svg_width = chart_export::DEFAULT_WIDTH;
        let svg_height = chart_export::DEFAULT_HEIGHT;
        let title = "Airplane Crashes by Operator and Count".to_string();
        let x_label = "Operator".to_string();
        let y_label = "Count".to_string();

        Self {
            data_path,
            svg_width,
            svg_height,
            title,
            x_label,
            y_label,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        let mut config = Self::default();
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(".crashdash"));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with("#") {
                continue;
            }
            let mut iter = line.split("=");
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("data_path"), Some(path_str)) => {
                    let path = PathBuf::from_str(path_str)
                        .expect("could not parse 'data_path' as file name");
                    config.data_path = path;
                }
                (Some("svg_width"), Some(width_str)) => {
                    if let Ok(width) = width_str.parse::<u64>() {
                        config.svg_width = width;
                    } else {
                        log::warn!("could not parse 'svg_width' as number")
                    }
                }
                (Some("svg_height"), Some(height_str)) => {
                    if let Ok(height) = height_str.parse::<u64>() {
                        config.svg_height = height;
                    } else {
                        log::warn!("could not parse 'svg_height' as number")
                    }
                }
                (Some("title"), Some(title)) => {
                    config.title = title.to_string();
                }
                (Some("x_label"), Some(x_label)) => {
                    config.x_label = x_label.to_string();
                }
                (Some("y_label"), Some(y_label)) => {
                    config.y_label = y_label.to_string();
                }
                _ => continue,
            }
        }
        Ok(config)
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            title: self.title.clone(),
            x_title: self.x_label.clone(),
            y_title: self.y_label.clone(),
            series_names: ChartStyle::default().series_names,
        }
    }

    /// Preferences view. Changes apply to the next chart rebuild and svg
    /// export, they are not written back to the config file.
    pub fn render(&mut self, _ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading("Preferences");
        ui.separator();

        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Dataset path");
                let mut path_str = self.data_path.display().to_string();
                if ui.text_edit_singleline(&mut path_str).changed() {
                    self.data_path = PathBuf::from(path_str);
                }
                ui.end_row();

                ui.label("SVG width");
                ui.add(egui::DragValue::new(&mut self.svg_width).range(100..=4000));
                ui.end_row();

                ui.label("SVG height");
                ui.add(egui::DragValue::new(&mut self.svg_height).range(100..=4000));
                ui.end_row();

                ui.label("Chart title");
                ui.text_edit_singleline(&mut self.title);
                ui.end_row();

                ui.label("x-axis label");
                ui.text_edit_singleline(&mut self.x_label);
                ui.end_row();

                ui.label("y-axis label");
                ui.text_edit_singleline(&mut self.y_label);
                ui.end_row();
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_file() {
        #[allow(unused)]
        let res = Config::from_config_file();
        dbg!(res);
    }
}
