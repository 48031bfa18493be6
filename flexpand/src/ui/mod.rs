pub mod plan_view;
