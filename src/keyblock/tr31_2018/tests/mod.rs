mod test_tr31;
