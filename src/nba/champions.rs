//! Champion franchise by season end-year.

use std::collections::BTreeMap;

const NBA_CHAMPIONS: &[(u16, &str)] = &[
    (1980, "Los Angeles Lakers"),
    (1981, "Boston Celtics"),
    (1982, "Los Angeles Lakers"),
    (1983, "Philadelphia 76ers"),
    (1984, "Boston Celtics"),
    (1985, "Los Angeles Lakers"),
    (1986, "Boston Celtics"),
    (1987, "Los Angeles Lakers"),
    (1988, "Los Angeles Lakers"),
    (1989, "Detroit Pistons"),
    (1990, "Detroit Pistons"),
    (1991, "Chicago Bulls"),
    (1992, "Chicago Bulls"),
    (1993, "Chicago Bulls"),
    (1994, "Houston Rockets"),
    (1995, "Houston Rockets"),
    (1996, "Chicago Bulls"),
    (1997, "Chicago Bulls"),
    (1998, "Chicago Bulls"),
    (1999, "San Antonio Spurs"),
    (2000, "Los Angeles Lakers"),
    (2001, "Los Angeles Lakers"),
    (2002, "Los Angeles Lakers"),
    (2003, "San Antonio Spurs"),
    (2004, "Detroit Pistons"),
    (2005, "San Antonio Spurs"),
    (2006, "Miami Heat"),
    (2007, "San Antonio Spurs"),
    (2008, "Boston Celtics"),
    (2009, "Los Angeles Lakers"),
    (2010, "Los Angeles Lakers"),
    (2011, "Dallas Mavericks"),
    (2012, "Miami Heat"),
    (2013, "Miami Heat"),
    (2014, "San Antonio Spurs"),
    (2015, "Golden State Warriors"),
    (2016, "Cleveland Cavaliers"),
    (2017, "Golden State Warriors"),
    (2018, "Golden State Warriors"),
    (2019, "Toronto Raptors"),
    (2020, "Los Angeles Lakers"),
    (2021, "Milwaukee Bucks"),
    (2022, "Golden State Warriors"),
    (2023, "Denver Nuggets"),
    (2024, "Boston Celtics"),
    (2025, "Oklahoma City Thunder"),
];

/// Immutable end-year to champion-name mapping.
///
/// Built once and handed to the aggregator, so tests can supply their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionTable {
    champions: BTreeMap<u16, String>,
}

impl ChampionTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        Self {
            champions: entries
                .into_iter()
                .map(|(year, name)| (year, name.into()))
                .collect(),
        }
    }

    /// NBA champions from the 1979-80 season onward.
    pub fn nba() -> Self {
        Self::new(NBA_CHAMPIONS.iter().copied())
    }

    /// Champion franchise for the season ending in `end_year`, if covered.
    pub fn champion_name(&self, end_year: u16) -> Option<&str> {
        self.champions.get(&end_year).map(String::as_str)
    }

    /// `(first, last)` end-years covered.
    pub fn coverage(&self) -> Option<(u16, u16)> {
        let first = *self.champions.keys().next()?;
        let last = *self.champions.keys().next_back()?;
        Some((first, last))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.champions.iter().map(|(y, n)| (*y, n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

impl Default for ChampionTable {
    fn default() -> Self {
        Self::nba()
    }
}
