mod test_util;
