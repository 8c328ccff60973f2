//! Unit tests for stats payload parsing

use super::*;
use serde_json::json;

#[cfg(test)]
mod result_set_tests {
    use super::*;

    fn roster_response() -> StatsResponse {
        serde_json::from_value(json!({
            "resource": "commonteamroster",
            "resultSets": [
                {
                    "name": "CommonTeamRoster",
                    "headers": ["TeamID", "SEASON", "PLAYER", "NUM", "POSITION", "HEIGHT", "WEIGHT", "PLAYER_ID"],
                    "rowSet": [
                        [1610612747, "1979", "Kareem Abdul-Jabbar", "33", "C", "7-2", "225", 76003],
                        [1610612747, "1979", "Magic Johnson", "32", "G", "6-9", "215", 77142],
                        [1610612747, "1979", "Unknown Height", "0", "F", "", "200", 99999],
                        [1610612747, "1979", "No Id", "1", "F", "6-6", "200", null]
                    ]
                },
                {
                    "name": "Coaches",
                    "headers": ["TEAM_ID", "COACH_NAME"],
                    "rowSet": [[1610612747, "Paul Westhead"]]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_result_set_lookup_by_name() {
        let resp = roster_response();
        assert_eq!(resp.result_set("Coaches").unwrap().row_set.len(), 1);

        match resp.result_set("PlayersSeasonTotals") {
            Err(HeightsError::MissingResultSet { name }) => assert_eq!(name, "PlayersSeasonTotals"),
            other => panic!("Expected MissingResultSet, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_entries_from_team_roster() {
        let resp = roster_response();
        let rs = resp.result_set(ROSTER_RESULT_SET).unwrap();
        let entries = RosterEntry::from_team_roster(rs, TeamId::new(1610612747)).unwrap();

        // Row without a player id is dropped; blank height is kept as None.
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].player_id, PlayerId::new(76003));
        assert_eq!(entries[0].player_name, "Kareem Abdul-Jabbar");
        assert_eq!(entries[0].height.as_deref(), Some("7-2"));
        assert_eq!(entries[1].team_id, TeamId::new(1610612747));
        assert_eq!(entries[2].height, None);
    }

    #[test]
    fn test_roster_missing_height_column() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "CommonTeamRoster",
            "headers": ["PLAYER", "PLAYER_ID"],
            "rowSet": []
        }))
        .unwrap();

        match RosterEntry::from_team_roster(&rs, TeamId::new(1)) {
            Err(HeightsError::MissingColumn { column, .. }) => assert_eq!(column, "HEIGHT"),
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_column_order_does_not_matter() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "CommonTeamRoster",
            "headers": ["PLAYER_ID", "HEIGHT", "PLAYER"],
            "rowSet": [["2544", "6-9", "LeBron James"]]
        }))
        .unwrap();

        let entries = RosterEntry::from_team_roster(&rs, TeamId::new(1610612747)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player_id, PlayerId::new(2544));
        assert_eq!(entries[0].team_id, TeamId::new(1610612747));
        assert_eq!(entries[0].height.as_deref(), Some("6-9"));
    }

    #[test]
    fn test_roster_entries_from_player_bios() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "LeagueDashPlayerBioStats",
            "headers": ["PLAYER_ID", "PLAYER_NAME", "TEAM_ID", "TEAM_ABBREVIATION", "PLAYER_HEIGHT", "PLAYER_HEIGHT_INCHES"],
            "rowSet": [
                [203999, "Nikola Jokic", 1610612743, "DEN", "6-11", 83],
                [1630162, "Anthony Edwards", 1610612750, "MIN", null, 76],
                [1, "Nobody", 1610612750, "MIN", null, null]
            ]
        }))
        .unwrap();

        let entries = RosterEntry::from_player_bios(&rs).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].height.as_deref(), Some("6-11"));
        assert_eq!(entries[1].height.as_deref(), Some("6-4"));
        assert_eq!(entries[1].team_id, TeamId::new(1610612750));
        assert_eq!(entries[2].height, None);
    }

    #[test]
    fn test_player_season_totals() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "PlayersSeasonTotals",
            "headers": ["GROUP_SET", "PLAYER_ID", "PLAYER_NAME", "GP", "MIN"],
            "rowSet": [
                ["Players", 77142, "Magic Johnson", 77, 2795.0],
                ["Players", 76003, "Kareem Abdul-Jabbar", 82, "3143"],
                ["Players", 1000, "Did Not Play", 0, null]
            ]
        }))
        .unwrap();

        let totals = PlayerSeasonTotals::from_result_set(&rs).unwrap();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].minutes, 2795.0);
        assert_eq!(totals[1].minutes, 3143.0);
        assert_eq!(totals[2].minutes, 0.0);
    }

    #[test]
    fn test_player_season_totals_requires_minutes() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "PlayersSeasonTotals",
            "headers": ["PLAYER_ID", "PLAYER_NAME"],
            "rowSet": []
        }))
        .unwrap();

        assert!(PlayerSeasonTotals::from_result_set(&rs).is_err());
    }

    #[test]
    fn test_empty_row_set_defaults() {
        let rs: ResultSet = serde_json::from_value(json!({
            "name": "CommonTeamRoster",
            "headers": ["PLAYER_ID", "PLAYER", "HEIGHT"]
        }))
        .unwrap();

        assert!(rs.row_set.is_empty());
        assert!(RosterEntry::from_team_roster(&rs, TeamId::new(1)).unwrap().is_empty());
    }
}
