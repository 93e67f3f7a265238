//! Built-in sample parameters shown when no definitions file is given.

use crate::param::{Hierarchy, ParameterItem, ParameterSet, Result};

/// Two branches of settings: a data server and plotting options
pub fn sample_hierarchy() -> Hierarchy {
    Hierarchy::new()
        .with_branch(
            "tiled",
            Hierarchy::new().with_leaf(
                "server",
                ParameterSet::new()
                    .with(
                        "settings_file",
                        ParameterItem::text("settings file", "~/.config/settings.ini"),
                    )
                    .with("catalog", ParameterItem::text("catalog", "bluesky_data"))
                    .with("url", ParameterItem::text("url", "http://localhost")),
            ),
        )
        .with_branch(
            "UI",
            Hierarchy::new().with_leaf(
                "plotting",
                ParameterSet::new()
                    .with(
                        "autoplot",
                        ParameterItem::checkbox("autoplot", true)
                            .with_tooltip("Plot when the run is selected."),
                    )
                    .with(
                        "autoselect",
                        ParameterItem::checkbox("autoselect", true)
                            .with_tooltip("Automatically select the signals to plot."),
                    )
                    .with("colors", ParameterItem::text("colors", "r b g k")),
            ),
        )
}

/// One parameter of every kind
pub fn sample_parameters() -> Result<ParameterSet> {
    Ok(ParameterSet::new()
        .with(
            "autoscale",
            ParameterItem::checkbox("Autoscale", true).with_tooltip("Rescale axes on new data"),
        )
        .with(
            "color",
            ParameterItem::choice("Line color", "", ["", "red", "green", "blue"])?,
        )
        .with(
            "points",
            ParameterItem::index("Points", 5, 1, 10)?.with_tooltip("Points per scan step"),
        )
        .with("title", ParameterItem::text("Title", "scan")))
}
