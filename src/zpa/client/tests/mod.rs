mod segment_groups;
