mod pace_bar;
mod pace_hero;
mod trajectory_chart;

pub use pace_bar::PaceBar;
pub use pace_hero::PaceHero;
pub use trajectory_chart::TrajectoryChart;
