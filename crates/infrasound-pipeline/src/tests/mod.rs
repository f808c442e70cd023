mod burn_info_encode;
mod deposits;
