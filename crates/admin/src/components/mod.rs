//! Reusable view components for admin templates.

pub mod data_table;
pub mod line_chart;
pub mod nav;
pub mod stat_card;

pub use data_table::{DataTableConfig, TableColumn, users_table_config};
pub use line_chart::{ChartGeometry, LineChart, LineChartView, growth_chart};
pub use nav::{NavItem, sidebar_nav};
pub use stat_card::{CardTone, StatCard, dashboard_stat_cards};
