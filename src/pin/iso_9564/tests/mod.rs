mod test_format_0;
