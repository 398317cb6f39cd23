#[cfg(test)]
mod common;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod menu_agreement_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod theme_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod role_boundary_tests;
