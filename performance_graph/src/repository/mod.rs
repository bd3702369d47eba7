pub mod quickchart_repository_impl;
