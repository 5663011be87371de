// Presentation layer: maps one parsed command to one ApiClient call and
// one output string. Read commands render a table; write commands print
// a status line. Errors never propagate past this layer, they become
// their user-facing message.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::cli::{Command, DeleteResource, GetResource, RunResource};
use crate::error::ApiError;

/// Render records as a bordered, left-aligned ASCII table. Headers come
/// from the record type, in field declaration order, so an empty slice
/// still yields the header row.
pub fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::ascii());
    table.to_string()
}

fn render_or_message<T: Tabled>(result: Result<Vec<T>, ApiError>) -> String {
    match result {
        Ok(rows) => render_table(rows),
        Err(e) => e.to_string(),
    }
}

/// Execute a command against the broker and produce the text to print.
///
/// `run task` validates its ids here: an empty source or target id is
/// rejected before any request is built, so nothing goes out on the
/// wire for invalid input.
pub fn dispatch(api: &ApiClient, command: Command) -> String {
    match command {
        Command::Get(GetResource::Clusters) => render_or_message(api.list_clusters()),
        Command::Get(GetResource::Cluster { id }) => {
            // Single records render as a one-row table.
            render_or_message(api.get_cluster(&id).map(|c| vec![c]))
        }
        Command::Get(GetResource::Tasks) => render_or_message(api.list_tasks()),
        Command::Get(GetResource::Task { id }) => {
            render_or_message(api.get_task(&id).map(|t| vec![t]))
        }
        Command::Delete(DeleteResource::Task { id, strict }) => {
            let result = if strict {
                api.delete_task_strict(&id)
            } else {
                api.delete_task(&id)
            };
            match result {
                Ok(()) => "task deleted".to_string(),
                Err(e) => e.to_string(),
            }
        }
        Command::Run(RunResource::Task {
            source_cluster_id,
            target_cluster_id,
        }) => {
            if source_cluster_id.is_empty() {
                return "--sourceClusterId is required".to_string();
            }
            if target_cluster_id.is_empty() {
                return "--targetClusterId is required".to_string();
            }
            match api.create_task(&source_cluster_id, &target_cluster_id) {
                Ok(()) => "Task started successfully".to_string(),
                Err(e) => e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cluster, Task};

    fn cluster(id: &str) -> Cluster {
        Cluster {
            id: id.to_string(),
            kubelet_version: "1.18".to_string(),
            config_maps: 2,
            deployments: 3,
            pods: 10,
            replication_controllers: 0,
            replica_sets: 4,
            services: 5,
        }
    }

    /// Split a rendered table back into trimmed cell values, one Vec per
    /// visible row (header first).
    fn parse_rows(table: &str) -> Vec<Vec<String>> {
        table
            .lines()
            .filter(|line| line.contains('|'))
            .map(|line| {
                line.trim_matches('|')
                    .split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_input_still_renders_the_schema_header() {
        let rendered = render_table(Vec::<Cluster>::new());
        let rows = parse_rows(&rendered);
        assert_eq!(rows.len(), 1, "expected header row only:\n{rendered}");
        assert_eq!(
            rows[0],
            vec![
                "id",
                "kubelet_version",
                "config_maps",
                "deployments",
                "pods",
                "replication_controllers",
                "replica_sets",
                "services"
            ]
        );
    }

    #[test]
    fn rendered_rows_round_trip_in_declared_order() {
        let rendered = render_table(vec![cluster("c1"), cluster("c2")]);
        let rows = parse_rows(&rendered);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["c1", "1.18", "2", "3", "10", "0", "4", "5"]);
        assert_eq!(rows[2], vec!["c2", "1.18", "2", "3", "10", "0", "4", "5"]);
    }

    #[test]
    fn tasks_render_with_cluster_ids() {
        let task = Task {
            id: "t1".to_string(),
            status: "RUNNING".to_string(),
            source_cluster: "c1".to_string(),
            target_cluster: "c2".to_string(),
        };
        let rows = parse_rows(&render_table(vec![task]));
        assert_eq!(rows[0], vec!["id", "status", "source_cluster", "target_cluster"]);
        assert_eq!(rows[1], vec!["t1", "RUNNING", "c1", "c2"]);
    }

    #[test]
    fn broker_order_is_preserved() {
        let rendered = render_table(vec![cluster("z"), cluster("a")]);
        let rows = parse_rows(&rendered);
        assert_eq!(rows[1][0], "z");
        assert_eq!(rows[2][0], "a");
    }
}
