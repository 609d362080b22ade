mod asset_state_test;
